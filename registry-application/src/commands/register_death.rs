use crate::{
    command::Command, command_handler::CommandHandler, context::AppContext, error::AppError,
    repositories::RegistryRepositories,
};
use async_trait::async_trait;
use registry_domain::death::DeathDetails;
use registry_domain::death_registration::DeathRegistrationService;
use registry_domain::domain_service::DomainService;
use registry_domain::entity::Entity;
use registry_domain::ids::DeathRecordId;

/// 登记死亡：写入死亡记录并把成员标记为已故
///
/// 第二步失败时已写入的记录会被撤销，结果见
/// [`DeathRegistrationError`](registry_domain::death_registration::DeathRegistrationError)。
#[derive(Debug, Clone)]
pub struct RegisterDeath {
    pub details: DeathDetails,
}

impl Command for RegisterDeath {
    const NAME: &'static str = "RegisterDeath";
    type Output = DeathRecordId;
}

pub struct RegisterDeathHandler {
    service: DeathRegistrationService,
}

impl RegisterDeathHandler {
    pub fn new(repos: &RegistryRepositories) -> Self {
        Self {
            service: DeathRegistrationService::new(repos.people.clone(), repos.deaths.clone()),
        }
    }
}

#[async_trait]
impl CommandHandler<RegisterDeath> for RegisterDeathHandler {
    async fn handle(&self, _ctx: &AppContext, cmd: RegisterDeath) -> Result<DeathRecordId, AppError> {
        let registration = self.service.execute(cmd.details).await?;
        Ok(registration.record.id().clone())
    }
}
