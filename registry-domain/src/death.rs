//! 死亡记录
//!
use crate::error::{DomainError, DomainResult};
use crate::ids::{DeathRecordId, PersonId};
use bon::Builder;
use chrono::NaiveDate;
use registry_macros::entity;

/// 与一名成员一一对应；写入时需同时将该成员标记为已故
#[entity(id = DeathRecordId)]
#[derive(PartialEq, Eq)]
pub struct DeathRecord {
    pub person_id: PersonId,
    pub death_date: NaiveDate,
    pub death_place: String,
    pub complainant: String,
    pub remark: String,
}

/// 登记死亡所需的信息
#[derive(Debug, Clone, Builder)]
pub struct DeathDetails {
    pub person_id: PersonId,
    pub death_date: NaiveDate,
    #[builder(default)]
    pub death_place: String,
    #[builder(default)]
    pub complainant: String,
    #[builder(default)]
    pub remark: String,
}

impl DeathRecord {
    pub fn record(id: DeathRecordId, details: DeathDetails) -> DomainResult<Self> {
        if details.person_id.is_blank() {
            return Err(DomainError::InvalidValue {
                reason: "death record requires a person".to_string(),
            });
        }
        let mut record = <Self as crate::entity::Entity>::new(id, 0);
        record.person_id = details.person_id;
        record.death_date = details.death_date;
        record.death_place = details.death_place;
        record.complainant = details.complainant;
        record.remark = details.remark;
        Ok(record)
    }
}
