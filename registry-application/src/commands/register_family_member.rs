use crate::{
    command::Command, command_handler::CommandHandler, context::AppContext, error::AppError,
    repositories::RegistryRepositories,
};
use async_trait::async_trait;
use registry_domain::error::DomainError;
use registry_domain::ids::PersonId;
use registry_domain::person::{NewFamilyMember, Person};
use tracing::info;

/// 登记家庭成员；所属户必须已登记
#[derive(Debug, Clone)]
pub struct RegisterFamilyMember {
    pub member: NewFamilyMember,
}

impl Command for RegisterFamilyMember {
    const NAME: &'static str = "RegisterFamilyMember";
    type Output = PersonId;
}

pub struct RegisterFamilyMemberHandler {
    repos: RegistryRepositories,
}

impl RegisterFamilyMemberHandler {
    pub fn new(repos: RegistryRepositories) -> Self {
        Self { repos }
    }
}

#[async_trait]
impl CommandHandler<RegisterFamilyMember> for RegisterFamilyMemberHandler {
    async fn handle(&self, ctx: &AppContext, cmd: RegisterFamilyMember) -> Result<PersonId, AppError> {
        let household_no = cmd.member.household_no.clone();
        if household_no.is_blank() {
            return Err(AppError::required("household_no"));
        }
        if self.repos.households.find_by_no(&household_no).await?.is_none() {
            return Err(DomainError::NotFound {
                reason: format!("household '{household_no}'"),
            }
            .into());
        }

        let id = PersonId::generate();
        let person = Person::enroll(id.clone(), cmd.member)?;
        self.repos.people.insert(person).await?;

        info!(person_id = %id, %household_no, actor_id = ?ctx.actor_id, "family member registered");
        Ok(id)
    }
}
