use crate::{
    command::Command, command_handler::CommandHandler, context::AppContext, error::AppError,
    repositories::RegistryRepositories,
};
use async_trait::async_trait;
use registry_domain::ids::DisabilityId;
use tracing::info;

#[derive(Debug, Clone)]
pub struct DeleteDisability {
    pub id: DisabilityId,
}

impl Command for DeleteDisability {
    const NAME: &'static str = "DeleteDisability";
    type Output = ();
}

pub struct DeleteDisabilityHandler {
    repos: RegistryRepositories,
}

impl DeleteDisabilityHandler {
    pub fn new(repos: RegistryRepositories) -> Self {
        Self { repos }
    }
}

#[async_trait]
impl CommandHandler<DeleteDisability> for DeleteDisabilityHandler {
    async fn handle(&self, ctx: &AppContext, cmd: DeleteDisability) -> Result<(), AppError> {
        self.repos.disabilities.delete(&cmd.id).await?;
        info!(disability_id = %cmd.id, actor_id = ?ctx.actor_id, "disability deleted");
        Ok(())
    }
}
