use bon::Builder;
use chrono::{Local, NaiveDate};

/// 应用层上下文（Application Context）
///
/// 承载一次命令/查询调用的横切信息：
/// - `correlation_id`：链路追踪，写入日志
/// - `actor_id`：操作人
/// - `idempotency_key`：幂等键，随命令写入日志，是否去重由上层决定
/// - `today`：年龄计算所用的“今天”，未设置时取本地日期
///
/// ```rust
/// use registry_application::context::AppContext;
///
/// let ctx = AppContext::builder()
///     .correlation_id("cor-123".to_string())
///     .actor_id("clerk-1".to_string())
///     .build();
/// assert_eq!(ctx.correlation_id.as_deref(), Some("cor-123"));
/// ```
#[derive(Clone, Debug, Default, Builder)]
pub struct AppContext {
    pub correlation_id: Option<String>,
    pub actor_id: Option<String>,
    pub idempotency_key: Option<String>,
    pub today: Option<NaiveDate>,
}

impl AppContext {
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub(crate) fn correlation(&self) -> &str {
        self.correlation_id.as_deref().unwrap_or("-")
    }

    pub(crate) fn idempotency(&self) -> &str {
        self.idempotency_key.as_deref().unwrap_or("-")
    }
}
