use super::LocationLevel;
use crate::ids::LocationId;
use serde::{Deserialize, Serialize};

/// 行政区划节点；`name` 仅用于显示，不保证全树唯一
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationNode {
    pub id: LocationId,
    pub level: LocationLevel,
    pub name: String,
    pub parent_id: Option<LocationId>,
}

impl LocationNode {
    /// 省/邦级节点
    pub fn root(id: impl Into<LocationId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            level: LocationLevel::StateRegion,
            name: name.into(),
            parent_id: None,
        }
    }

    pub fn child(
        level: LocationLevel,
        id: impl Into<LocationId>,
        name: impl Into<String>,
        parent_id: impl Into<LocationId>,
    ) -> Self {
        Self {
            id: id.into(),
            level,
            name: name.into(),
            parent_id: Some(parent_id.into()),
        }
    }

    pub fn is_child_of(&self, parent: &LocationId) -> bool {
        self.parent_id.as_ref() == Some(parent)
    }
}
