//! 领域服务（Domain Service）
//!
//! 跨多个实体、需要访问仓储的领域逻辑，如死亡登记的两步写入。
//!
use async_trait::async_trait;

#[async_trait]
pub trait DomainService: Send + Sync {
    type Input;
    type Output;
    type Error;

    async fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;
}
