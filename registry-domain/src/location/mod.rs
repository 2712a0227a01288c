//! 五级行政区划（省/邦 → 县 → 镇区 → 街区/村组 → 村）
//!
//! - `LocationHierarchy`：一次性加载的只读参考数据，按父级筛选下级选项
//! - `CascadeState`/`LocationCascade`：级联下拉框的状态机
//! - `DisplayPath`/`Resolved`：把选择解析为显示名称，缺失时显式为 `Unknown`
//!
mod cascade;
mod hierarchy;
mod level;
mod node;
mod resolve;
mod selection;

pub use cascade::{CascadeState, LocationCascade, OptionList};
pub use hierarchy::LocationHierarchy;
pub use level::LocationLevel;
pub use node::LocationNode;
pub use resolve::{DisplayPath, Resolved, UNKNOWN_LABEL};
pub use selection::LocationSelection;
