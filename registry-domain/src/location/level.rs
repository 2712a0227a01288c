use serde::{Deserialize, Serialize};
use std::fmt;

/// 行政区划层级，自上而下
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationLevel {
    StateRegion,
    District,
    Township,
    WardVillageTract,
    Village,
}

impl LocationLevel {
    pub const ALL: [LocationLevel; 5] = [
        LocationLevel::StateRegion,
        LocationLevel::District,
        LocationLevel::Township,
        LocationLevel::WardVillageTract,
        LocationLevel::Village,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn parent(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn child(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// 严格位于本级之下的各级，自上而下
    pub fn below(self) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().skip(self.index() + 1)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            LocationLevel::StateRegion => "state_region",
            LocationLevel::District => "district",
            LocationLevel::Township => "township",
            LocationLevel::WardVillageTract => "ward_village_tract",
            LocationLevel::Village => "village",
        }
    }
}

impl fmt::Display for LocationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
