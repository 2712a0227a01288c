use super::repository::{
    DeathRecordRepository, DisabilityRepository, HouseholdRepository, LocationRepository,
    PersonRepository,
};
use crate::death::DeathRecord;
use crate::disability::Disability;
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::household::Household;
use crate::ids::{DeathRecordId, DisabilityId, HouseholdId, LocationId, PersonId};
use crate::location::{LocationLevel, LocationNode};
use crate::person::Person;
use crate::value_object::HouseholdNo;
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

/// 内存版台账存储
#[derive(Default)]
pub struct InMemoryRegistryStore {
    locations: DashMap<(LocationLevel, LocationId), LocationNode>,
    households: DashMap<HouseholdId, Household>,
    household_nos: DashMap<HouseholdNo, HouseholdId>,
    people: DashMap<PersonId, Person>,
    deaths: DashMap<DeathRecordId, DeathRecord>,
    disabilities: DashMap<DisabilityId, Disability>,
}

impl InMemoryRegistryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同层同标识的节点会被覆盖
    pub fn with_locations(nodes: impl IntoIterator<Item = LocationNode>) -> Self {
        let store = Self::new();
        store.put_locations(nodes);
        store
    }

    pub fn put_locations(&self, nodes: impl IntoIterator<Item = LocationNode>) {
        for node in nodes {
            self.locations.insert((node.level, node.id.clone()), node);
        }
    }

    pub fn remove_location(&self, level: LocationLevel, id: &LocationId) -> Option<LocationNode> {
        self.locations
            .remove(&(level, id.clone()))
            .map(|(_, node)| node)
    }
}

fn sorted<T, K: Ord>(mut items: Vec<T>, key: impl Fn(&T) -> K) -> Vec<T> {
    items.sort_by_key(|item| key(item));
    items
}

#[async_trait]
impl LocationRepository for InMemoryRegistryStore {
    async fn load_nodes(&self) -> DomainResult<Vec<LocationNode>> {
        let nodes = self.locations.iter().map(|entry| entry.value().clone()).collect();
        Ok(sorted(nodes, |node: &LocationNode| (node.level, node.id.clone())))
    }
}

#[async_trait]
impl HouseholdRepository for InMemoryRegistryStore {
    async fn find_by_no(&self, household_no: &HouseholdNo) -> DomainResult<Option<Household>> {
        let Some(id) = self.household_nos.get(household_no).map(|id| id.value().clone()) else {
            return Ok(None);
        };
        Ok(self.households.get(&id).map(|household| household.value().clone()))
    }

    async fn list(&self) -> DomainResult<Vec<Household>> {
        let households = self.households.iter().map(|entry| entry.value().clone()).collect();
        Ok(sorted(households, |household: &Household| household.household_no.clone()))
    }

    async fn insert(&self, household: Household) -> DomainResult<()> {
        match self.household_nos.entry(household.household_no.clone()) {
            Entry::Occupied(_) => Err(DomainError::Conflict {
                reason: format!("household_no '{}' already registered", household.household_no),
            }),
            Entry::Vacant(slot) => {
                slot.insert(household.id().clone());
                debug!(household_no = %household.household_no, "household stored");
                self.households.insert(household.id().clone(), household);
                Ok(())
            }
        }
    }
}

#[async_trait]
impl PersonRepository for InMemoryRegistryStore {
    async fn get(&self, id: &PersonId) -> DomainResult<Option<Person>> {
        Ok(self.people.get(id).map(|person| person.value().clone()))
    }

    async fn list(&self) -> DomainResult<Vec<Person>> {
        let people = self.people.iter().map(|entry| entry.value().clone()).collect();
        Ok(sorted(people, |person: &Person| {
            (person.household_no.clone(), person.name.clone(), person.id().clone())
        }))
    }

    async fn insert(&self, person: Person) -> DomainResult<()> {
        match self.people.entry(person.id().clone()) {
            Entry::Occupied(_) => Err(DomainError::Conflict {
                reason: format!("person '{}' already exists", person.id()),
            }),
            Entry::Vacant(slot) => {
                slot.insert(person);
                Ok(())
            }
        }
    }

    async fn mark_deceased(&self, id: &PersonId, expected_version: usize) -> DomainResult<Person> {
        let mut person = self.people.get_mut(id).ok_or_else(|| DomainError::NotFound {
            reason: format!("person '{id}'"),
        })?;
        if person.version() != expected_version {
            return Err(DomainError::VersionConflict {
                expected: expected_version,
                actual: person.version(),
            });
        }
        person.mark_deceased()?;
        Ok(person.value().clone())
    }
}

#[async_trait]
impl DeathRecordRepository for InMemoryRegistryStore {
    async fn insert(&self, record: DeathRecord) -> DomainResult<()> {
        match self.deaths.entry(record.id().clone()) {
            Entry::Occupied(_) => Err(DomainError::Conflict {
                reason: format!("death record '{}' already exists", record.id()),
            }),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    async fn delete(&self, id: &DeathRecordId) -> DomainResult<()> {
        self.deaths
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound {
                reason: format!("death record '{id}'"),
            })
    }

    async fn list(&self) -> DomainResult<Vec<DeathRecord>> {
        let records = self.deaths.iter().map(|entry| entry.value().clone()).collect();
        Ok(sorted(records, |record: &DeathRecord| (record.death_date, record.id().clone())))
    }

    async fn count(&self) -> DomainResult<usize> {
        Ok(self.deaths.len())
    }
}

#[async_trait]
impl DisabilityRepository for InMemoryRegistryStore {
    async fn list(&self) -> DomainResult<Vec<Disability>> {
        let disabilities = self.disabilities.iter().map(|entry| entry.value().clone()).collect();
        Ok(sorted(disabilities, |disability: &Disability| disability.id().clone()))
    }

    async fn insert(&self, disability: Disability) -> DomainResult<()> {
        self.disabilities.insert(disability.id().clone(), disability);
        Ok(())
    }

    async fn delete(&self, id: &DisabilityId) -> DomainResult<()> {
        self.disabilities
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound {
                reason: format!("disability '{id}'"),
            })
    }
}
