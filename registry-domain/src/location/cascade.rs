use super::{DisplayPath, LocationHierarchy, LocationLevel, LocationNode, LocationSelection};
use crate::ids::LocationId;
use serde::Serialize;

/// 某一级下拉框的选项缓存
///
/// `NotLoaded` 表示尚未加载，`Loaded(vec![])` 表示已加载但没有下级，两者需区别对待。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum OptionList {
    #[default]
    NotLoaded,
    Loaded(Vec<LocationNode>),
}

impl OptionList {
    pub fn is_loaded(&self) -> bool {
        matches!(self, OptionList::Loaded(_))
    }

    pub fn as_slice(&self) -> Option<&[LocationNode]> {
        match self {
            OptionList::Loaded(nodes) => Some(nodes),
            OptionList::NotLoaded => None,
        }
    }
}

/// 级联选择状态
///
/// 状态转换均为纯函数，返回新状态；上级变化时下级的选择与选项缓存在同一次转换中清空。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CascadeState {
    selection: LocationSelection,
    options: [OptionList; 5],
}

impl CascadeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &LocationSelection {
        &self.selection
    }

    pub fn selected(&self, level: LocationLevel) -> Option<&LocationId> {
        self.selection.get(level)
    }

    pub fn options(&self, level: LocationLevel) -> &OptionList {
        &self.options[level.index()]
    }

    /// 记录 `level` 的选择，并清空其下各级的选择与选项缓存
    ///
    /// 幂等：同一层级重复选择同一标识，结果与选择一次相同。空白标识等同于取消选择。
    pub fn on_select(&self, level: LocationLevel, selected: impl Into<LocationId>) -> CascadeState {
        let mut next = self.clone();
        next.selection.set(level, Some(selected.into()));
        next.clear_below(level);
        next
    }

    /// 取消 `level` 及其下各级的选择
    pub fn on_clear(&self, level: LocationLevel) -> CascadeState {
        let mut next = self.clone();
        next.selection.set(level, None);
        next.clear_below(level);
        next
    }

    /// 按当前父级选择加载 `level` 的选项
    pub fn load_options(&self, hierarchy: &LocationHierarchy, level: LocationLevel) -> CascadeState {
        let parent = level.parent().and_then(|p| self.selection.get(p));
        let nodes = hierarchy
            .options_for(level, parent)
            .into_iter()
            .cloned()
            .collect();

        let mut next = self.clone();
        next.options[level.index()] = OptionList::Loaded(nodes);
        next
    }

    fn clear_below(&mut self, level: LocationLevel) {
        self.selection.clear_below(level);
        for lower in level.below() {
            self.options[lower.index()] = OptionList::NotLoaded;
        }
    }
}

/// 绑定参考数据的级联选择器：选择后自动加载直接下级的选项
#[derive(Debug, Clone)]
pub struct LocationCascade<'h> {
    hierarchy: &'h LocationHierarchy,
    state: CascadeState,
}

impl<'h> LocationCascade<'h> {
    pub fn new(hierarchy: &'h LocationHierarchy) -> Self {
        let state = CascadeState::new().load_options(hierarchy, LocationLevel::StateRegion);
        Self { hierarchy, state }
    }

    pub fn state(&self) -> &CascadeState {
        &self.state
    }

    pub fn into_state(self) -> CascadeState {
        self.state
    }

    pub fn select(&mut self, level: LocationLevel, id: impl Into<LocationId>) -> &CascadeState {
        let mut next = self.state.on_select(level, id);
        if let Some(child) = level.child() {
            next = next.load_options(self.hierarchy, child);
        }
        self.state = next;
        &self.state
    }

    pub fn clear(&mut self, level: LocationLevel) -> &CascadeState {
        self.state = self.state.on_clear(level);
        &self.state
    }

    pub fn display_path(&self) -> DisplayPath {
        self.hierarchy.resolve_display_path(self.state.selection())
    }
}
