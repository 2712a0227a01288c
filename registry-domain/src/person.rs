//! 家庭成员（Person / Family record）
//!
use crate::dates::age_in_years;
use crate::error::{DomainError, DomainResult};
use crate::ids::PersonId;
use crate::value_object::HouseholdNo;
use bon::Builder;
use chrono::NaiveDate;
use registry_macros::entity;

/// 一名成员的人口信息，通过户号归属于唯一一户
///
/// `gender` 为语言环境相关的原始标记，统计时由 `GenderTokens` 归类。
#[entity(id = PersonId)]
#[derive(PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub nrc_id: String,
    pub gender: String,
    pub father_name: String,
    pub mother_name: String,
    pub remark: String,
    pub is_deceased: bool,
    pub household_no: HouseholdNo,
    pub relationship: Option<String>,
    pub occupation: Option<String>,
    pub education: Option<String>,
    pub ethnicity: Option<String>,
    pub religion: Option<String>,
}

/// 登记成员所需的信息
#[derive(Debug, Clone, Default, Builder)]
pub struct NewFamilyMember {
    pub name: String,
    pub date_of_birth: Option<NaiveDate>,
    #[builder(default)]
    pub nrc_id: String,
    #[builder(default)]
    pub gender: String,
    #[builder(default)]
    pub father_name: String,
    #[builder(default)]
    pub mother_name: String,
    #[builder(default)]
    pub remark: String,
    pub household_no: HouseholdNo,
    pub relationship: Option<String>,
    pub occupation: Option<String>,
    pub education: Option<String>,
    pub ethnicity: Option<String>,
    pub religion: Option<String>,
}

impl Person {
    /// 新登记的成员均为在世
    pub fn enroll(id: PersonId, details: NewFamilyMember) -> DomainResult<Self> {
        if details.name.trim().is_empty() {
            return Err(DomainError::InvalidValue {
                reason: "name must not be empty".to_string(),
            });
        }
        let mut person = <Self as crate::entity::Entity>::new(id, 0);
        person.name = details.name;
        person.date_of_birth = details.date_of_birth;
        person.nrc_id = details.nrc_id;
        person.gender = details.gender;
        person.father_name = details.father_name;
        person.mother_name = details.mother_name;
        person.remark = details.remark;
        person.household_no = details.household_no;
        person.relationship = details.relationship;
        person.occupation = details.occupation;
        person.education = details.education;
        person.ethnicity = details.ethnicity;
        person.religion = details.religion;
        Ok(person)
    }

    /// 标记为已故并递增版本；重复标记视为非法状态
    pub fn mark_deceased(&mut self) -> DomainResult<()> {
        if self.is_deceased {
            return Err(DomainError::InvalidState {
                reason: format!("person '{}' is already deceased", self.id),
            });
        }
        self.is_deceased = true;
        self.version += 1;
        Ok(())
    }

    /// 撤销已故标记（补偿用），同样递增版本
    pub fn revive(&mut self) {
        if self.is_deceased {
            self.is_deceased = false;
            self.version += 1;
        }
    }

    /// 缺少出生日期时无年龄
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        self.date_of_birth
            .and_then(|date_of_birth| age_in_years(date_of_birth, today))
    }
}
