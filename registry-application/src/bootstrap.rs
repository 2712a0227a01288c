//! 装配：把处理器注册到命令/查询总线
//!
use crate::commands::{
    DeleteDisability, DeleteDisabilityHandler, RegisterDeath, RegisterDeathHandler,
    RegisterDisability, RegisterDisabilityHandler, RegisterFamilyMember,
    RegisterFamilyMemberHandler, RegisterHousehold, RegisterHouseholdHandler,
};
use crate::error::AppError;
use crate::queries::{
    DashboardQuery, DashboardQueryHandler, DeathListQuery, DeathListQueryHandler,
    DisabilityListQuery, DisabilityListQueryHandler, FamilyListQuery, FamilyListQueryHandler,
    LocationOptionsQuery, LocationOptionsQueryHandler,
};
use crate::repositories::RegistryRepositories;
use crate::{InMemoryCommandBus, InMemoryQueryBus};
use registry_domain::config::RegistryConfig;
use registry_domain::persist::InMemoryRegistryStore;
use registry_domain::value_object::ValueObject;
use std::sync::Arc;
use tracing::info;

pub struct RegistryApp {
    pub command_bus: InMemoryCommandBus,
    pub query_bus: InMemoryQueryBus,
    pub config: Arc<RegistryConfig>,
}

impl RegistryApp {
    pub fn in_memory(store: Arc<InMemoryRegistryStore>, config: RegistryConfig) -> Result<Self, AppError> {
        bootstrap(RegistryRepositories::from_store(store), config)
    }
}

pub fn bootstrap(repos: RegistryRepositories, config: RegistryConfig) -> Result<RegistryApp, AppError> {
    config.gender_tokens().validate()?;
    let config = Arc::new(config);

    let command_bus = InMemoryCommandBus::new();
    command_bus.register::<RegisterHousehold, _>(Arc::new(RegisterHouseholdHandler::new(repos.clone())))?;
    command_bus
        .register::<RegisterFamilyMember, _>(Arc::new(RegisterFamilyMemberHandler::new(repos.clone())))?;
    command_bus.register::<RegisterDeath, _>(Arc::new(RegisterDeathHandler::new(&repos)))?;
    command_bus
        .register::<RegisterDisability, _>(Arc::new(RegisterDisabilityHandler::new(repos.clone())))?;
    command_bus.register::<DeleteDisability, _>(Arc::new(DeleteDisabilityHandler::new(repos.clone())))?;

    let query_bus = InMemoryQueryBus::new();
    query_bus.register::<DashboardQuery, _>(Arc::new(DashboardQueryHandler::new(
        repos.clone(),
        config.clone(),
    )))?;
    query_bus.register::<FamilyListQuery, _>(Arc::new(FamilyListQueryHandler::new(
        repos.clone(),
        config.clone(),
    )))?;
    query_bus.register::<DeathListQuery, _>(Arc::new(DeathListQueryHandler::new(
        repos.clone(),
        config.clone(),
    )))?;
    query_bus.register::<DisabilityListQuery, _>(Arc::new(DisabilityListQueryHandler::new(
        repos.clone(),
        config.clone(),
    )))?;
    query_bus.register::<LocationOptionsQuery, _>(Arc::new(LocationOptionsQueryHandler::new(repos)))?;

    info!(
        commands = ?command_bus.registered_commands(),
        queries = ?query_bus.registered_queries(),
        "registry application ready"
    );

    Ok(RegistryApp {
        command_bus,
        query_bus,
        config,
    })
}
