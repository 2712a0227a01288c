//! 日志初始化
//!
use crate::error::AppError;
use tracing_subscriber::EnvFilter;

/// 安装 fmt 订阅器；`RUST_LOG` 优先于 `default_directive`
///
/// 重复调用返回 `AppError::Infra`。
pub fn init_tracing(default_directive: &str) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|err| AppError::Infra(format!("tracing init failed: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_reports_error() {
        let _ = init_tracing("registry_application=debug");
        assert!(init_tracing("info").is_err());
    }
}
