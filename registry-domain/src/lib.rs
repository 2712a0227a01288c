//! 户籍登记领域层（registry-domain）
//!
//! 面向村/户籍管理台账的领域模型与纯计算：
//! - 五级行政区划（`location`）：级联选择状态机与名称解析，缺失一律降级为 `Unknown`
//! - 户、家庭成员、死亡与残疾记录（`household`/`person`/`death`/`disability`）
//! - 统计汇总（`aggregation`）：按村统计人口、性别与户数，生成图表序列
//! - 规约（`specification`）与分页（`pagination`）：列表页的内存筛选与分页
//! - 仓储接口（`persist`）与死亡登记领域服务（`death_registration`）
//!
//! 计算部分均为同步纯函数；存储由 `persist` 中的 trait 注入，
//! `InMemoryRegistryStore` 提供基于内存的实现。
//!
pub mod aggregation;
pub mod config;
pub mod dates;
pub mod death;
pub mod death_registration;
pub mod directory;
pub mod disability;
pub mod domain_service;
pub mod entity;
pub mod error;
pub mod household;
pub mod ids;
pub mod location;
pub mod pagination;
pub mod persist;
pub mod person;
pub mod specification;
pub mod value_object;

// 过程宏生成 ::registry_domain 路径，本 crate 内部也需要能解析
extern crate self as registry_domain;
