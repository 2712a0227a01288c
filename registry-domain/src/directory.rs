//! 户籍目录：把成员经 户号 → 户 → 村 的链路关联到行政区划
//!
use crate::household::Household;
use crate::ids::LocationId;
use crate::location::{DisplayPath, LocationHierarchy, LocationLevel};
use crate::person::Person;
use crate::value_object::HouseholdNo;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// 成员所在位置的解析结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// 仅当村节点存在于参考数据中时才有值
    pub village_id: Option<LocationId>,
    pub path: DisplayPath,
}

impl Placement {
    pub fn unknown() -> Self {
        Self {
            village_id: None,
            path: DisplayPath::unknown(),
        }
    }
}

/// 已关联户与行政区划的成员行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub person: Person,
    pub placement: Placement,
}

impl RegistryEntry {
    pub fn path(&self) -> &DisplayPath {
        &self.placement.path
    }
}

/// 户号索引 + 行政区划快照
pub struct HouseholdDirectory<'a> {
    households: HashMap<&'a HouseholdNo, &'a Household>,
    hierarchy: &'a LocationHierarchy,
}

impl<'a> HouseholdDirectory<'a> {
    /// 户号重复时保留先出现的一户
    pub fn new(households: &'a [Household], hierarchy: &'a LocationHierarchy) -> Self {
        let mut index = HashMap::with_capacity(households.len());
        for household in households {
            if index.contains_key(&household.household_no) {
                warn!(
                    household_no = %household.household_no,
                    "duplicate household_no, keeping the first occurrence"
                );
                continue;
            }
            index.insert(&household.household_no, household);
        }
        Self {
            households: index,
            hierarchy,
        }
    }

    pub fn hierarchy(&self) -> &'a LocationHierarchy {
        self.hierarchy
    }

    pub fn household(&self, household_no: &HouseholdNo) -> Option<&'a Household> {
        self.households.get(household_no).copied()
    }

    /// 解析户所在位置；户不存在时整行为 `Unknown`，其余情况逐级降级
    pub fn locate(&self, household_no: &HouseholdNo) -> Placement {
        let Some(household) = self.household(household_no) else {
            debug!(household_no = %household_no, "household not found");
            return Placement::unknown();
        };

        let village_id = household
            .location
            .village()
            .filter(|id| self.hierarchy.node(LocationLevel::Village, id).is_some())
            .cloned();

        Placement {
            village_id,
            path: self.hierarchy.resolve_display_path(&household.location),
        }
    }

    pub fn entry(&self, person: &Person) -> RegistryEntry {
        RegistryEntry {
            person: person.clone(),
            placement: self.locate(&person.household_no),
        }
    }

    pub fn entries(&self, people: &[Person]) -> Vec<RegistryEntry> {
        people.iter().map(|person| self.entry(person)).collect()
    }
}
