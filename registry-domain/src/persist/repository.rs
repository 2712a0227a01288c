use crate::death::DeathRecord;
use crate::disability::Disability;
use crate::error::DomainResult;
use crate::household::Household;
use crate::ids::{DeathRecordId, DisabilityId, PersonId};
use crate::location::{LocationHierarchy, LocationNode};
use crate::person::Person;
use crate::value_object::HouseholdNo;
use async_trait::async_trait;
use std::sync::Arc;

/// 行政区划参考数据，一次性整体读取
#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn load_nodes(&self) -> DomainResult<Vec<LocationNode>>;

    async fn load_hierarchy(&self) -> DomainResult<LocationHierarchy> {
        Ok(LocationHierarchy::new(self.load_nodes().await?))
    }
}

#[async_trait]
pub trait HouseholdRepository: Send + Sync {
    async fn find_by_no(&self, household_no: &HouseholdNo) -> DomainResult<Option<Household>>;

    async fn list(&self) -> DomainResult<Vec<Household>>;

    /// 户号已存在时返回 `DomainError::Conflict`
    async fn insert(&self, household: Household) -> DomainResult<()>;
}

#[async_trait]
pub trait PersonRepository: Send + Sync {
    async fn get(&self, id: &PersonId) -> DomainResult<Option<Person>>;

    async fn list(&self) -> DomainResult<Vec<Person>>;

    async fn insert(&self, person: Person) -> DomainResult<()>;

    /// 乐观锁：存储中的版本与 `expected_version` 不一致时返回 `VersionConflict`
    async fn mark_deceased(&self, id: &PersonId, expected_version: usize) -> DomainResult<Person>;
}

#[async_trait]
pub trait DeathRecordRepository: Send + Sync {
    async fn insert(&self, record: DeathRecord) -> DomainResult<()>;

    async fn delete(&self, id: &DeathRecordId) -> DomainResult<()>;

    async fn list(&self) -> DomainResult<Vec<DeathRecord>>;

    async fn count(&self) -> DomainResult<usize> {
        Ok(self.list().await?.len())
    }
}

#[async_trait]
pub trait DisabilityRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<Disability>>;

    async fn insert(&self, disability: Disability) -> DomainResult<()>;

    async fn delete(&self, id: &DisabilityId) -> DomainResult<()>;
}

#[async_trait]
impl<T: PersonRepository + ?Sized> PersonRepository for Arc<T> {
    async fn get(&self, id: &PersonId) -> DomainResult<Option<Person>> {
        (**self).get(id).await
    }

    async fn list(&self) -> DomainResult<Vec<Person>> {
        (**self).list().await
    }

    async fn insert(&self, person: Person) -> DomainResult<()> {
        (**self).insert(person).await
    }

    async fn mark_deceased(&self, id: &PersonId, expected_version: usize) -> DomainResult<Person> {
        (**self).mark_deceased(id, expected_version).await
    }
}

#[async_trait]
impl<T: DeathRecordRepository + ?Sized> DeathRecordRepository for Arc<T> {
    async fn insert(&self, record: DeathRecord) -> DomainResult<()> {
        (**self).insert(record).await
    }

    async fn delete(&self, id: &DeathRecordId) -> DomainResult<()> {
        (**self).delete(id).await
    }

    async fn list(&self) -> DomainResult<Vec<DeathRecord>> {
        (**self).list().await
    }

    async fn count(&self) -> DomainResult<usize> {
        (**self).count().await
    }
}
