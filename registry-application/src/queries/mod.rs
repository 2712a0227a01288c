//! 读用例
//!
//! 每次查询重新读取快照，在内存中筛选、汇总与分页。
//!
mod dashboard;
mod death_list;
mod disability_list;
mod family_list;
mod location_options;

pub use dashboard::{DashboardDto, DashboardQuery, DashboardQueryHandler, GenderTotalsDto};
pub use death_list::{DeathListQuery, DeathListQueryHandler, DeathRowDto};
pub use disability_list::{DisabilityListQuery, DisabilityListQueryHandler, DisabilityRowDto};
pub use family_list::{FamilyListQuery, FamilyListQueryHandler};
pub use location_options::{
    LocationOptionDto, LocationOptionsDto, LocationOptionsQuery, LocationOptionsQueryHandler,
};
