use super::{LocationHierarchy, LocationLevel, LocationSelection};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 无法解析时的默认显示文本
pub const UNKNOWN_LABEL: &str = "Unknown";

/// 单个层级的解析结果
///
/// `Unknown` 与合法的空名称 `Name("")` 相互区分。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolved {
    Name(String),
    Unknown,
}

impl Resolved {
    pub fn name(&self) -> Option<&str> {
        match self {
            Resolved::Name(name) => Some(name),
            Resolved::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Resolved::Unknown)
    }

    /// 显示文本，`Unknown` 时使用给定的占位文本
    pub fn label_or<'a>(&'a self, unknown: &'a str) -> &'a str {
        self.name().unwrap_or(unknown)
    }
}

impl fmt::Display for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label_or(UNKNOWN_LABEL))
    }
}

/// 五级显示名称，总是完整返回
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPath {
    pub state_region: Resolved,
    pub district: Resolved,
    pub township: Resolved,
    pub ward_village_tract: Resolved,
    pub village: Resolved,
}

impl DisplayPath {
    pub fn unknown() -> Self {
        Self {
            state_region: Resolved::Unknown,
            district: Resolved::Unknown,
            township: Resolved::Unknown,
            ward_village_tract: Resolved::Unknown,
            village: Resolved::Unknown,
        }
    }

    pub fn get(&self, level: LocationLevel) -> &Resolved {
        match level {
            LocationLevel::StateRegion => &self.state_region,
            LocationLevel::District => &self.district,
            LocationLevel::Township => &self.township,
            LocationLevel::WardVillageTract => &self.ward_village_tract,
            LocationLevel::Village => &self.village,
        }
    }

    fn slot_mut(&mut self, level: LocationLevel) -> &mut Resolved {
        match level {
            LocationLevel::StateRegion => &mut self.state_region,
            LocationLevel::District => &mut self.district,
            LocationLevel::Township => &mut self.township,
            LocationLevel::WardVillageTract => &mut self.ward_village_tract,
            LocationLevel::Village => &mut self.village,
        }
    }
}

impl Default for DisplayPath {
    fn default() -> Self {
        Self::unknown()
    }
}

impl LocationHierarchy {
    /// 单级名称；未选择或节点不存在时为 `Unknown`
    pub fn name_of(&self, level: LocationLevel, selection: &LocationSelection) -> Resolved {
        selection
            .get(level)
            .and_then(|id| self.node(level, id))
            .map(|node| Resolved::Name(node.name.clone()))
            .unwrap_or(Resolved::Unknown)
    }

    /// 把（可能不完整的）选择解析为五级显示名称
    ///
    /// 各级独立解析，某一级缺失不影响其他级。
    pub fn resolve_display_path(&self, selection: &LocationSelection) -> DisplayPath {
        let mut path = DisplayPath::unknown();
        for level in LocationLevel::ALL {
            *path.slot_mut(level) = self.name_of(level, selection);
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::LocationNode;

    #[test]
    fn unknown_is_distinct_from_empty_name() {
        let empty = Resolved::Name(String::new());
        assert_ne!(empty, Resolved::Unknown);
        assert_eq!(empty.to_string(), "");
        assert_eq!(Resolved::Unknown.to_string(), "Unknown");
        assert_eq!(Resolved::Unknown.label_or("—"), "—");
    }

    #[test]
    fn partial_selection_resolves_per_field() {
        let h = LocationHierarchy::new(vec![
            LocationNode::root("sr-1", "Mandalay"),
            LocationNode::child(LocationLevel::District, "d-1", "", "sr-1"),
        ]);
        let selection = LocationSelection::new()
            .with(LocationLevel::StateRegion, "sr-1")
            .with(LocationLevel::District, "d-1")
            .with(LocationLevel::Township, "t-missing");

        let path = h.resolve_display_path(&selection);
        assert_eq!(path.state_region, Resolved::Name("Mandalay".into()));
        assert_eq!(path.district, Resolved::Name(String::new()));
        assert_eq!(path.township, Resolved::Unknown);
        assert_eq!(path.ward_village_tract, Resolved::Unknown);
        assert_eq!(path.village, Resolved::Unknown);
    }
}
