//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象：户号与性别标记。
//!
use crate::error::{DomainError, DomainResult};
use registry_macros::value_object;
use std::fmt;

pub trait ValueObject {
    type Error;

    fn validate(&self) -> Result<(), Self::Error>;
}

/// 户号（业务主键，区别于内部 `HouseholdId`）
///
/// 家庭成员通过户号而不是内部标识关联到户。
#[value_object]
#[derive(Hash, PartialOrd, Ord)]
#[serde(from = "String", into = "String")]
pub struct HouseholdNo(String);

impl HouseholdNo {
    /// 去除首尾空白；允许为空，空户号不计入户数统计
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_string())
    }

    /// 创建并校验非空
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let no = Self::new(value);
        no.validate()?;
        Ok(no)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl ValueObject for HouseholdNo {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.is_blank() {
            return Err(DomainError::InvalidValue {
                reason: "household_no must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for HouseholdNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HouseholdNo {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for HouseholdNo {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<HouseholdNo> for String {
    fn from(value: HouseholdNo) -> Self {
        value.0
    }
}

/// 性别分类结果；无法识别的取值单独归入 `Other`，不丢弃计数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenderClass {
    Male,
    Female,
    Other,
}

/// 男/女两个性别标记（随语言环境而定，按原样精确比较）
#[value_object]
pub struct GenderTokens {
    male: String,
    female: String,
}

impl GenderTokens {
    pub fn new(male: impl Into<String>, female: impl Into<String>) -> Self {
        Self {
            male: male.into(),
            female: female.into(),
        }
    }

    pub fn male(&self) -> &str {
        &self.male
    }

    pub fn female(&self) -> &str {
        &self.female
    }

    pub fn classify(&self, gender: &str) -> GenderClass {
        if gender == self.male {
            GenderClass::Male
        } else if gender == self.female {
            GenderClass::Female
        } else {
            GenderClass::Other
        }
    }
}

impl ValueObject for GenderTokens {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.male.is_empty() || self.female.is_empty() {
            return Err(DomainError::InvalidValue {
                reason: "gender tokens must not be empty".to_string(),
            });
        }
        if self.male == self.female {
            return Err(DomainError::InvalidValue {
                reason: "male and female tokens must differ".to_string(),
            });
        }
        Ok(())
    }
}
