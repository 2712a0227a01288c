//! 死亡登记
//!
//! 两步耦合写入：先写入死亡记录，再在乐观锁下把成员标记为已故。
//! 第二步失败时删除已写入的记录（补偿），并在错误中报告补偿结果，
//! 调用方据此区分“未写入任何数据”与“第一步已写入”两种情况。
//!
use crate::death::{DeathDetails, DeathRecord};
use crate::domain_service::DomainService;
use crate::entity::Entity;
use crate::error::DomainError;
use crate::ids::{DeathRecordId, PersonId};
use crate::persist::{DeathRecordRepository, PersonRepository};
use crate::person::Person;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

/// 补偿动作的结果
#[derive(Debug)]
pub enum Compensation {
    /// 已删除第一步写入的死亡记录
    RolledBack,
    /// 删除失败，存储中残留一条孤立的死亡记录，需要人工处理
    Failed(DomainError),
}

impl fmt::Display for Compensation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compensation::RolledBack => f.write_str("rolled back"),
            Compensation::Failed(err) => write!(f, "rollback failed: {err}"),
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DeathRegistrationError {
    #[error("person not found: {0}")]
    PersonNotFound(PersonId),

    #[error("person already deceased: {0}")]
    AlreadyDeceased(PersonId),

    #[error("invalid death details: {0}")]
    InvalidDetails(#[source] DomainError),

    #[error("person lookup failed: {0}")]
    Lookup(#[source] DomainError),

    /// 第一步失败，未写入任何数据
    #[error("death record insert failed: {source}")]
    RecordInsertFailed {
        #[source]
        source: DomainError,
    },

    /// 第一步已写入，第二步失败
    #[error("marking person deceased failed after record {record_id} was written: {source} ({compensation})")]
    DeceasedFlagFailed {
        record_id: DeathRecordId,
        #[source]
        source: DomainError,
        compensation: Compensation,
    },
}

impl DeathRegistrationError {
    /// 是否留下了部分写入（第一步成功且补偿失败）
    pub fn left_partial_write(&self) -> bool {
        matches!(
            self,
            DeathRegistrationError::DeceasedFlagFailed {
                compensation: Compensation::Failed(_),
                ..
            }
        )
    }
}

/// 登记成功后的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeathRegistration {
    pub record: DeathRecord,
    pub person: Person,
}

pub struct DeathRegistrationService {
    people: Arc<dyn PersonRepository>,
    deaths: Arc<dyn DeathRecordRepository>,
}

impl DeathRegistrationService {
    pub fn new(people: Arc<dyn PersonRepository>, deaths: Arc<dyn DeathRecordRepository>) -> Self {
        Self { people, deaths }
    }

    async fn compensate(&self, record_id: &DeathRecordId) -> Compensation {
        match self.deaths.delete(record_id).await {
            Ok(()) => {
                info!(%record_id, "death record rolled back");
                Compensation::RolledBack
            }
            Err(err) => {
                error!(%record_id, error = %err, "death record rollback failed, orphan record left behind");
                Compensation::Failed(err)
            }
        }
    }
}

#[async_trait]
impl DomainService for DeathRegistrationService {
    type Input = DeathDetails;
    type Output = DeathRegistration;
    type Error = DeathRegistrationError;

    async fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let person_id = input.person_id.clone();
        let person = self
            .people
            .get(&person_id)
            .await
            .map_err(DeathRegistrationError::Lookup)?
            .ok_or_else(|| DeathRegistrationError::PersonNotFound(person_id.clone()))?;

        if person.is_deceased {
            return Err(DeathRegistrationError::AlreadyDeceased(person_id));
        }

        let record = DeathRecord::record(DeathRecordId::generate(), input)
            .map_err(DeathRegistrationError::InvalidDetails)?;
        let record_id = record.id().clone();

        self.deaths
            .insert(record.clone())
            .await
            .map_err(|source| DeathRegistrationError::RecordInsertFailed { source })?;

        match self.people.mark_deceased(&person_id, person.version()).await {
            Ok(person) => {
                info!(%person_id, %record_id, "death registered");
                Ok(DeathRegistration { record, person })
            }
            Err(source) => {
                warn!(%person_id, %record_id, error = %source, "marking person deceased failed, compensating");
                let compensation = self.compensate(&record_id).await;
                Err(DeathRegistrationError::DeceasedFlagFailed {
                    record_id,
                    source,
                    compensation,
                })
            }
        }
    }
}
