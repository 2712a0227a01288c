//! 残疾记录
//!
use crate::dates::format_display_date;
use crate::error::{DomainError, DomainResult};
use crate::ids::{DisabilityId, PersonId};
use crate::person::Person;
use crate::specification::Specification;
use registry_macros::entity;
use serde::{Deserialize, Serialize};

#[entity(id = DisabilityId)]
#[derive(PartialEq, Eq)]
pub struct Disability {
    pub person_id: PersonId,
    pub type_name: String,
    pub description: String,
}

impl Disability {
    pub fn register(
        id: DisabilityId,
        person_id: PersonId,
        type_name: impl Into<String>,
        description: impl Into<String>,
    ) -> DomainResult<Self> {
        let type_name = type_name.into();
        if type_name.trim().is_empty() {
            return Err(DomainError::InvalidValue {
                reason: "disability type must not be empty".to_string(),
            });
        }
        let mut disability = <Self as crate::entity::Entity>::new(id, 0);
        disability.person_id = person_id;
        disability.type_name = type_name;
        disability.description = description.into();
        Ok(disability)
    }
}

/// 列表行：残疾记录及其所属成员（成员可能已被删除）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisabilityEntry {
    pub disability: Disability,
    pub person: Option<Person>,
}

/// 残疾列表的关键字搜索
///
/// 类型、描述、成员姓名、身份证号、性别做忽略大小写的子串匹配；
/// 出生日期按 `dd/mm/yyyy` 格式做前缀匹配。
pub struct DisabilitySearch {
    needle: String,
}

impl DisabilitySearch {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
        }
    }
}

impl Specification<DisabilityEntry> for DisabilitySearch {
    fn is_satisfied_by(&self, entry: &DisabilityEntry) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        let contains = |value: &str| value.to_lowercase().contains(&self.needle);

        if contains(&entry.disability.type_name) || contains(&entry.disability.description) {
            return true;
        }
        let Some(person) = &entry.person else {
            return false;
        };
        contains(&person.name)
            || contains(&person.nrc_id)
            || contains(&person.gender)
            || (person.date_of_birth.is_some()
                && format_display_date(person.date_of_birth).starts_with(&self.needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::NewFamilyMember;
    use crate::value_object::HouseholdNo;
    use chrono::NaiveDate;

    fn entry() -> DisabilityEntry {
        let person = Person::enroll(
            PersonId::from("p-1"),
            NewFamilyMember::builder()
                .name("Ko Min".to_string())
                .date_of_birth(NaiveDate::from_ymd_opt(1985, 7, 4).unwrap())
                .nrc_id("9/MaYaMa(N)000111".to_string())
                .household_no(HouseholdNo::new("H1"))
                .build(),
        )
        .unwrap();
        DisabilityEntry {
            disability: Disability::register(DisabilityId::from("d-1"), PersonId::from("p-1"), "Visual", "Low vision").unwrap(),
            person: Some(person),
        }
    }

    #[test]
    fn register_requires_type() {
        assert!(Disability::register(DisabilityId::generate(), PersonId::from("p"), " ", "").is_err());
    }

    #[test]
    fn search_covers_record_and_person() {
        let entry = entry();
        assert!(DisabilitySearch::new("visual").is_satisfied_by(&entry));
        assert!(DisabilitySearch::new("LOW").is_satisfied_by(&entry));
        assert!(DisabilitySearch::new("ko min").is_satisfied_by(&entry));
        assert!(DisabilitySearch::new("mayama").is_satisfied_by(&entry));
        assert!(DisabilitySearch::new("04/07").is_satisfied_by(&entry));
        assert!(!DisabilitySearch::new("07/1985").is_satisfied_by(&entry));
        assert!(DisabilitySearch::new("").is_satisfied_by(&entry));
    }

    #[test]
    fn orphaned_record_only_matches_own_fields() {
        let mut entry = entry();
        entry.person = None;
        assert!(DisabilitySearch::new("visual").is_satisfied_by(&entry));
        assert!(!DisabilitySearch::new("ko min").is_satisfied_by(&entry));
    }
}
