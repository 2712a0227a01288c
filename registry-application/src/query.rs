use crate::dto::Dto;

/// 应用层查询（Query）
///
/// 只读意图，不改变台账状态，结果为 [`Dto`](crate::dto::Dto)。
pub trait Query: Send + Sync + 'static {
    const NAME: &'static str;

    type Dto: Dto;
}
