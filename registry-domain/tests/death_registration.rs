use async_trait::async_trait;
use chrono::NaiveDate;
use registry_domain::death::DeathDetails;
use registry_domain::death_registration::{Compensation, DeathRegistrationError, DeathRegistrationService};
use registry_domain::domain_service::DomainService;
use registry_domain::entity::Entity;
use registry_domain::error::{DomainError, DomainResult};
use registry_domain::ids::{DeathRecordId, PersonId};
use registry_domain::death::DeathRecord;
use registry_domain::persist::{DeathRecordRepository, InMemoryRegistryStore, PersonRepository};
use registry_domain::person::{NewFamilyMember, Person};
use registry_domain::value_object::HouseholdNo;
use std::sync::Arc;

fn person(id: &str) -> Person {
    Person::enroll(
        PersonId::from(id),
        NewFamilyMember::builder()
            .name("U Tin".to_string())
            .household_no(HouseholdNo::new("H1"))
            .build(),
    )
    .unwrap()
}

fn details(id: &str) -> DeathDetails {
    DeathDetails::builder()
        .person_id(PersonId::from(id))
        .death_date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        .death_place("home".to_string())
        .build()
}

/// 读取正常，但把成员标记为已故总是失败
struct FlagFailingPeople(Arc<InMemoryRegistryStore>);

#[async_trait]
impl PersonRepository for FlagFailingPeople {
    async fn get(&self, id: &PersonId) -> DomainResult<Option<Person>> {
        self.0.get(id).await
    }

    async fn list(&self) -> DomainResult<Vec<Person>> {
        PersonRepository::list(self.0.as_ref()).await
    }

    async fn insert(&self, person: Person) -> DomainResult<()> {
        PersonRepository::insert(self.0.as_ref(), person).await
    }

    async fn mark_deceased(&self, _id: &PersonId, _expected_version: usize) -> DomainResult<Person> {
        Err(DomainError::Repository {
            reason: "connection reset".to_string(),
        })
    }
}

/// 写入正常，删除总是失败
struct UndeletableDeaths(Arc<InMemoryRegistryStore>);

#[async_trait]
impl DeathRecordRepository for UndeletableDeaths {
    async fn insert(&self, record: DeathRecord) -> DomainResult<()> {
        DeathRecordRepository::insert(self.0.as_ref(), record).await
    }

    async fn delete(&self, _id: &DeathRecordId) -> DomainResult<()> {
        Err(DomainError::Repository {
            reason: "read-only replica".to_string(),
        })
    }

    async fn list(&self) -> DomainResult<Vec<DeathRecord>> {
        DeathRecordRepository::list(self.0.as_ref()).await
    }
}

async fn seeded() -> Arc<InMemoryRegistryStore> {
    let store = Arc::new(InMemoryRegistryStore::new());
    PersonRepository::insert(store.as_ref(), person("p-1")).await.unwrap();
    store
}

#[tokio::test]
async fn registers_death_and_flags_person() {
    let store = seeded().await;
    let service = DeathRegistrationService::new(store.clone(), store.clone());

    let registration = service.execute(details("p-1")).await.unwrap();
    assert!(registration.person.is_deceased);
    assert_eq!(registration.person.version(), 1);
    assert_eq!(registration.record.person_id, PersonId::from("p-1"));
    assert_eq!(store.count().await.unwrap(), 1);

    let err = service.execute(details("p-1")).await.unwrap_err();
    assert!(matches!(err, DeathRegistrationError::AlreadyDeceased(_)));
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn unknown_person_writes_nothing() {
    let store = seeded().await;
    let service = DeathRegistrationService::new(store.clone(), store.clone());

    let err = service.execute(details("p-404")).await.unwrap_err();
    assert!(matches!(err, DeathRegistrationError::PersonNotFound(_)));
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn failed_flag_rolls_back_record() {
    let store = seeded().await;
    let service = DeathRegistrationService::new(Arc::new(FlagFailingPeople(store.clone())), store.clone());

    let err = service.execute(details("p-1")).await.unwrap_err();
    match &err {
        DeathRegistrationError::DeceasedFlagFailed { compensation, .. } => {
            assert!(matches!(compensation, Compensation::RolledBack));
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(!err.left_partial_write());
    assert_eq!(store.count().await.unwrap(), 0);
    assert!(!store.get(&PersonId::from("p-1")).await.unwrap().unwrap().is_deceased);
}

#[tokio::test]
async fn failed_rollback_is_reported_as_partial_write() {
    let store = seeded().await;
    let service = DeathRegistrationService::new(
        Arc::new(FlagFailingPeople(store.clone())),
        Arc::new(UndeletableDeaths(store.clone())),
    );

    let err = service.execute(details("p-1")).await.unwrap_err();
    assert!(err.left_partial_write());
    assert_eq!(store.count().await.unwrap(), 1);
}
