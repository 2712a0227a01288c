//! 户籍登记应用层（registry-application）
//!
//! 以 CQRS 组织台账的用例：
//! - 命令：登记户、登记成员、登记死亡、登记/删除残疾记录
//! - 查询：看板统计、成员列表、死亡列表、残疾列表、行政区划选项
//!
//! 命令与查询通过进程内总线按类型路由到处理器，`bootstrap` 负责装配。
//!
pub mod bootstrap;
pub mod command;
pub mod command_bus;
pub mod command_handler;
pub mod commands;
pub mod context;
pub mod dto;
pub mod error;
pub mod inmemory_command_bus;
pub mod inmemory_query_bus;
pub mod queries;
pub mod query;
pub mod query_bus;
pub mod query_handler;
pub mod repositories;
pub mod telemetry;

mod erased;

pub use bootstrap::{RegistryApp, bootstrap};
pub use inmemory_command_bus::InMemoryCommandBus;
pub use inmemory_query_bus::InMemoryQueryBus;
