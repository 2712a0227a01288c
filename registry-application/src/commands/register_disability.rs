use crate::{
    command::Command, command_handler::CommandHandler, context::AppContext, error::AppError,
    repositories::RegistryRepositories,
};
use async_trait::async_trait;
use registry_domain::disability::Disability;
use registry_domain::error::DomainError;
use registry_domain::ids::{DisabilityId, PersonId};
use tracing::info;

#[derive(Debug, Clone)]
pub struct RegisterDisability {
    pub person_id: PersonId,
    pub type_name: String,
    pub description: String,
}

impl Command for RegisterDisability {
    const NAME: &'static str = "RegisterDisability";
    type Output = DisabilityId;
}

pub struct RegisterDisabilityHandler {
    repos: RegistryRepositories,
}

impl RegisterDisabilityHandler {
    pub fn new(repos: RegistryRepositories) -> Self {
        Self { repos }
    }
}

#[async_trait]
impl CommandHandler<RegisterDisability> for RegisterDisabilityHandler {
    async fn handle(&self, ctx: &AppContext, cmd: RegisterDisability) -> Result<DisabilityId, AppError> {
        if self.repos.people.get(&cmd.person_id).await?.is_none() {
            return Err(DomainError::NotFound {
                reason: format!("person '{}'", cmd.person_id),
            }
            .into());
        }

        let id = DisabilityId::generate();
        let disability = Disability::register(id.clone(), cmd.person_id, cmd.type_name, cmd.description)?;
        self.repos.disabilities.insert(disability).await?;

        info!(disability_id = %id, actor_id = ?ctx.actor_id, "disability registered");
        Ok(id)
    }
}
