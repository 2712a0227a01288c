//! 持久化（persist）
//!
//! 仓储接口以对象安全的异步 trait 定义，由上层注入具体实现；
//! `InMemoryRegistryStore` 基于 `DashMap`，同时实现全部仓储接口。
//!
mod inmemory;
mod repository;

pub use inmemory::InMemoryRegistryStore;
pub use repository::{
    DeathRecordRepository, DisabilityRepository, HouseholdRepository, LocationRepository,
    PersonRepository,
};
