//! 领域层统一错误定义
//!
use crate::location::LocationLevel;
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 序列化/配置 ---
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },
    #[error("config error: {source}")]
    Config {
        #[from]
        source: toml::de::Error,
    },
    #[error("io error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("parse error: {reason}")]
    Parse { reason: String },

    // --- 仓储/持久化 ---
    #[error("repository error: {reason}")]
    Repository { reason: String },
    #[error("version conflict: expected={expected}, actual={actual}")]
    VersionConflict { expected: usize, actual: usize },
    #[error("conflict: {reason}")]
    Conflict { reason: String },

    // --- 领域规则 ---
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },
    #[error("invalid location: level={level}, reason={reason}")]
    InvalidLocation {
        level: LocationLevel,
        reason: String,
    },
    #[error("not found: {reason}")]
    NotFound { reason: String },
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<chrono::ParseError> for DomainError {
    fn from(err: chrono::ParseError) -> Self {
        DomainError::Parse {
            reason: err.to_string(),
        }
    }
}
