use super::{LocationLevel, LocationNode, LocationSelection};
use crate::error::{DomainError, DomainResult};
use crate::ids::LocationId;
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// 一次性加载的行政区划快照（会话内只读）
///
/// 每级节点按 `(name, id)` 升序存放，`name` 按码点比较，与语言环境无关。
#[derive(Debug, Clone, Default)]
pub struct LocationHierarchy {
    levels: [Vec<LocationNode>; 5],
    index: [HashMap<LocationId, usize>; 5],
}

impl LocationHierarchy {
    /// 由各级节点构建快照
    ///
    /// 参考数据中的坏行（空标识、根节点带父级、非根节点缺父级）跳过并记录告警，
    /// 同级重复标识保留名称排序后的第一个；父级指向不存在的节点同样只告警，
    /// 解析时降级为 `Unknown`。
    pub fn new(nodes: impl IntoIterator<Item = LocationNode>) -> Self {
        let mut levels: [Vec<LocationNode>; 5] = Default::default();

        for node in nodes {
            if node.id.is_blank() {
                warn!(level = %node.level, name = %node.name, "skipping location node with an empty id");
                continue;
            }
            let has_parent = node.parent_id.as_ref().is_some_and(|p| !p.is_blank());
            match (node.level.parent(), has_parent) {
                (None, true) => {
                    warn!(level = %node.level, id = %node.id, "skipping root location node with a parent");
                    continue;
                }
                (Some(_), false) => {
                    warn!(level = %node.level, id = %node.id, "skipping location node without a parent");
                    continue;
                }
                _ => {}
            }
            levels[node.level.index()].push(node);
        }

        let mut index: [HashMap<LocationId, usize>; 5] = Default::default();
        for level in LocationLevel::ALL {
            let nodes = &mut levels[level.index()];
            nodes.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

            let mut seen = HashSet::new();
            nodes.retain(|node| {
                let first = seen.insert(node.id.clone());
                if !first {
                    warn!(level = %level, id = %node.id, name = %node.name, "skipping duplicate location id");
                }
                first
            });

            index[level.index()] = nodes
                .iter()
                .enumerate()
                .map(|(pos, node)| (node.id.clone(), pos))
                .collect();
        }

        let hierarchy = Self { levels, index };
        hierarchy.warn_dangling_parents();
        hierarchy
    }

    fn warn_dangling_parents(&self) {
        for level in LocationLevel::ALL {
            let Some(parent_level) = level.parent() else {
                continue;
            };
            for node in self.nodes(level) {
                let Some(parent) = &node.parent_id else {
                    continue;
                };
                if self.node(parent_level, parent).is_none() {
                    warn!(
                        level = %level,
                        id = %node.id,
                        parent = %parent,
                        "location node references a missing parent"
                    );
                }
            }
        }
    }

    pub fn nodes(&self, level: LocationLevel) -> &[LocationNode] {
        &self.levels[level.index()]
    }

    pub fn node(&self, level: LocationLevel, id: &LocationId) -> Option<&LocationNode> {
        self.index[level.index()]
            .get(id)
            .map(|&pos| &self.levels[level.index()][pos])
    }

    pub fn len(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 某一级的可选项
    ///
    /// 省/邦级始终全部列出；其余各级只返回父级为 `parent` 的节点，
    /// `parent` 未选择（或为空白）时返回空序列，强制自上而下选择。
    pub fn options_for(
        &self,
        level: LocationLevel,
        parent: Option<&LocationId>,
    ) -> Vec<&LocationNode> {
        if level.parent().is_none() {
            return self.nodes(level).iter().collect();
        }
        match parent.filter(|p| !p.is_blank()) {
            Some(parent) => self
                .nodes(level)
                .iter()
                .filter(|node| node.is_child_of(parent))
                .collect(),
            None => Vec::new(),
        }
    }

    /// 校验一个完整且前后一致的五级选择（登记户时使用）
    pub fn validate_selection(&self, selection: &LocationSelection) -> DomainResult<()> {
        let mut parent: Option<&LocationId> = None;
        for level in LocationLevel::ALL {
            let Some(id) = selection.get(level) else {
                return Err(DomainError::InvalidLocation {
                    level,
                    reason: "nothing selected".to_string(),
                });
            };
            let Some(node) = self.node(level, id) else {
                return Err(DomainError::InvalidLocation {
                    level,
                    reason: format!("unknown id '{id}'"),
                });
            };
            if let Some(parent) = parent {
                if !node.is_child_of(parent) {
                    return Err(DomainError::InvalidLocation {
                        level,
                        reason: format!("'{id}' is not a child of '{parent}'"),
                    });
                }
            }
            parent = Some(id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LocationHierarchy {
        LocationHierarchy::new(vec![
            LocationNode::root("sr-2", "Sagaing"),
            LocationNode::root("sr-1", "Mandalay"),
            LocationNode::child(LocationLevel::District, "d-2", "Pyin Oo Lwin", "sr-1"),
            LocationNode::child(LocationLevel::District, "d-1", "Kyaukse", "sr-1"),
            LocationNode::child(LocationLevel::District, "d-3", "Monywa", "sr-2"),
        ])
    }

    #[test]
    fn roots_are_always_listed_sorted_by_name() {
        let h = sample();
        let names: Vec<_> = h
            .options_for(LocationLevel::StateRegion, None)
            .iter()
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(names, vec!["Mandalay", "Sagaing"]);
    }

    #[test]
    fn children_are_filtered_by_parent() {
        let h = sample();
        let parent = LocationId::from("sr-1");
        let names: Vec<_> = h
            .options_for(LocationLevel::District, Some(&parent))
            .iter()
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(names, vec!["Kyaukse", "Pyin Oo Lwin"]);
    }

    #[test]
    fn unset_parent_yields_no_options() {
        let h = sample();
        assert!(h.options_for(LocationLevel::District, None).is_empty());
        let blank = LocationId::from("");
        assert!(h.options_for(LocationLevel::District, Some(&blank)).is_empty());
    }

    #[test]
    fn sort_is_code_point_order() {
        let h = LocationHierarchy::new(vec![
            LocationNode::root("a", "alpha"),
            LocationNode::root("b", "Beta"),
            LocationNode::root("c", "Alpha"),
        ]);
        let names: Vec<_> = h
            .nodes(LocationLevel::StateRegion)
            .iter()
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alpha", "Beta", "alpha"]);
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let h = LocationHierarchy::new(vec![
            LocationNode::root("sr-1", "A"),
            LocationNode::root("sr-1", "B"),
            LocationNode::root("", "Blank"),
            LocationNode {
                id: "sr-2".into(),
                level: LocationLevel::StateRegion,
                name: "S".into(),
                parent_id: Some("x".into()),
            },
            LocationNode {
                id: "d-1".into(),
                level: LocationLevel::District,
                name: "D".into(),
                parent_id: None,
            },
            LocationNode::child(LocationLevel::District, "d-2", "Kyaukse", "sr-1"),
        ]);

        assert_eq!(h.len(), 2);
        assert_eq!(
            h.node(LocationLevel::StateRegion, &"sr-1".into())
                .map(|n| n.name.as_str()),
            Some("A")
        );
        assert!(h.node(LocationLevel::StateRegion, &"sr-2".into()).is_none());
        assert!(h.node(LocationLevel::District, &"d-1".into()).is_none());
        let parent = LocationId::from("sr-1");
        assert_eq!(h.options_for(LocationLevel::District, Some(&parent)).len(), 1);
    }

    #[test]
    fn dangling_parent_is_tolerated() {
        let h = LocationHierarchy::new(vec![LocationNode::child(
            LocationLevel::District,
            "d-9",
            "Lost",
            "sr-gone",
        )]);
        assert_eq!(h.len(), 1);
        assert!(h.node(LocationLevel::District, &"d-9".into()).is_some());
    }
}
