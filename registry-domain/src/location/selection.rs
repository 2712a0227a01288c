use super::LocationLevel;
use crate::ids::LocationId;
use serde::{Deserialize, Serialize};

/// 五级选择，每级至多一个标识；空白标识视为未选择
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationSelection {
    slots: [Option<LocationId>; 5],
}

impl LocationSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 五级完整选择
    pub fn complete(
        state_region: impl Into<LocationId>,
        district: impl Into<LocationId>,
        township: impl Into<LocationId>,
        ward_village_tract: impl Into<LocationId>,
        village: impl Into<LocationId>,
    ) -> Self {
        Self::new()
            .with(LocationLevel::StateRegion, state_region)
            .with(LocationLevel::District, district)
            .with(LocationLevel::Township, township)
            .with(LocationLevel::WardVillageTract, ward_village_tract)
            .with(LocationLevel::Village, village)
    }

    pub fn with(mut self, level: LocationLevel, id: impl Into<LocationId>) -> Self {
        self.set(level, Some(id.into()));
        self
    }

    pub fn get(&self, level: LocationLevel) -> Option<&LocationId> {
        self.slots[level.index()].as_ref()
    }

    pub fn set(&mut self, level: LocationLevel, id: Option<LocationId>) {
        self.slots[level.index()] = id.filter(|id| !id.is_blank());
    }

    pub fn clear_below(&mut self, level: LocationLevel) {
        for lower in level.below() {
            self.slots[lower.index()] = None;
        }
    }

    pub fn village(&self) -> Option<&LocationId> {
        self.get(LocationLevel::Village)
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_ids_are_unset() {
        let selection = LocationSelection::new()
            .with(LocationLevel::StateRegion, "sr-1")
            .with(LocationLevel::District, "");
        assert_eq!(
            selection.get(LocationLevel::StateRegion),
            Some(&LocationId::from("sr-1"))
        );
        assert_eq!(selection.get(LocationLevel::District), None);
        assert!(!selection.is_complete());
    }

    #[test]
    fn clear_below_keeps_the_level_itself() {
        let mut selection = LocationSelection::complete("s", "d", "t", "w", "v");
        assert!(selection.is_complete());
        selection.clear_below(LocationLevel::District);
        assert!(selection.get(LocationLevel::District).is_some());
        assert!(selection.get(LocationLevel::Township).is_none());
        assert!(selection.village().is_none());
    }
}
