//! 仓储装配与读侧快照
//!
use crate::error::AppError;
use registry_domain::directory::{HouseholdDirectory, RegistryEntry};
use registry_domain::household::Household;
use registry_domain::location::LocationHierarchy;
use registry_domain::persist::{
    DeathRecordRepository, DisabilityRepository, HouseholdRepository, InMemoryRegistryStore,
    LocationRepository, PersonRepository,
};
use registry_domain::person::Person;
use std::sync::Arc;

/// 应用层依赖的全部仓储
#[derive(Clone)]
pub struct RegistryRepositories {
    pub locations: Arc<dyn LocationRepository>,
    pub households: Arc<dyn HouseholdRepository>,
    pub people: Arc<dyn PersonRepository>,
    pub deaths: Arc<dyn DeathRecordRepository>,
    pub disabilities: Arc<dyn DisabilityRepository>,
}

impl RegistryRepositories {
    pub fn from_store(store: Arc<InMemoryRegistryStore>) -> Self {
        Self {
            locations: store.clone(),
            households: store.clone(),
            people: store.clone(),
            deaths: store.clone(),
            disabilities: store,
        }
    }
}

/// 一次查询所需的参考数据与成员数据
///
/// 每次查询重新读取，不在调用之间缓存。
pub struct RegistrySnapshot {
    pub hierarchy: LocationHierarchy,
    pub households: Vec<Household>,
    pub people: Vec<Person>,
}

impl RegistrySnapshot {
    pub async fn load(repos: &RegistryRepositories) -> Result<Self, AppError> {
        Ok(Self {
            hierarchy: repos.locations.load_hierarchy().await?,
            households: repos.households.list().await?,
            people: repos.people.list().await?,
        })
    }

    pub fn directory(&self) -> HouseholdDirectory<'_> {
        HouseholdDirectory::new(&self.households, &self.hierarchy)
    }

    pub fn entries(&self) -> Vec<RegistryEntry> {
        self.directory().entries(&self.people)
    }
}
