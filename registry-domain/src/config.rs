//! 登记台账配置
//!
//! 从 TOML 读取；缺省字段取默认值。
//!
use crate::error::DomainResult;
use crate::location::UNKNOWN_LABEL;
use crate::value_object::GenderTokens;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// 男性标记
    #[serde(default = "default_male_token")]
    pub male_token: String,

    /// 女性标记
    #[serde(default = "default_female_token")]
    pub female_token: String,

    /// 无法解析的地名显示文本
    #[serde(default = "default_unknown_label")]
    pub unknown_label: String,

    /// 列表页每页条数
    #[serde(default = "default_list_page_size")]
    pub list_page_size: usize,

    /// 看板明细每页条数
    #[serde(default = "default_dashboard_page_size")]
    pub dashboard_page_size: usize,
}

fn default_male_token() -> String {
    "ကျား".to_string()
}

fn default_female_token() -> String {
    "မ".to_string()
}

fn default_unknown_label() -> String {
    UNKNOWN_LABEL.to_string()
}

fn default_list_page_size() -> usize {
    10
}

fn default_dashboard_page_size() -> usize {
    20
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            male_token: default_male_token(),
            female_token: default_female_token(),
            unknown_label: default_unknown_label(),
            list_page_size: default_list_page_size(),
            dashboard_page_size: default_dashboard_page_size(),
        }
    }
}

impl RegistryConfig {
    pub fn from_toml_str(content: &str) -> DomainResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> DomainResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn gender_tokens(&self) -> GenderTokens {
        GenderTokens::new(self.male_token.clone(), self.female_token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = RegistryConfig::from_toml_str("list_page_size = 25\n").unwrap();
        assert_eq!(config.list_page_size, 25);
        assert_eq!(config.dashboard_page_size, 20);
        assert_eq!(config.male_token, "ကျား");
        assert_eq!(config.unknown_label, "Unknown");
    }

    #[test]
    fn empty_document_equals_default() {
        assert_eq!(
            RegistryConfig::from_toml_str("").unwrap(),
            RegistryConfig::default()
        );
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = RegistryConfig::from_toml_str("list_page_size = \"ten\"").unwrap_err();
        assert!(matches!(err, crate::error::DomainError::Config { .. }));
    }
}
