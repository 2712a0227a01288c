//! 实体（Entity）基础抽象
//!
//! 户、家庭成员、死亡与残疾记录都以标识区分，并携带版本号用于乐观锁。
//!
use std::{fmt::Display, str::FromStr};

pub trait Entity: Send + Sync {
    type Id: FromStr + Clone + Display;

    /// 使用给定标识与版本创建实体，其余字段取默认值
    fn new(id: Self::Id, version: usize) -> Self;

    fn id(&self) -> &Self::Id;

    fn version(&self) -> usize;
}
