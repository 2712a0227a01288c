use crate::{
    command::Command, command_handler::CommandHandler, context::AppContext, error::AppError,
    repositories::RegistryRepositories,
};
use async_trait::async_trait;
use bon::Builder;
use chrono::NaiveDate;
use registry_domain::entity::Entity;
use registry_domain::household::{Household, NewHousehold};
use registry_domain::ids::HouseholdId;
use registry_domain::location::LocationSelection;
use registry_domain::value_object::HouseholdNo;
use tracing::info;

/// 登记一户；五级行政区划必须完整且前后一致，户号不得重复
#[derive(Debug, Clone, Builder)]
pub struct RegisterHousehold {
    pub household_no: String,
    pub entry_date: Option<NaiveDate>,
    pub house_no: String,
    pub family_head: String,
    pub location: LocationSelection,
}

impl Command for RegisterHousehold {
    const NAME: &'static str = "RegisterHousehold";
    type Output = HouseholdId;
}

pub struct RegisterHouseholdHandler {
    repos: RegistryRepositories,
}

impl RegisterHouseholdHandler {
    pub fn new(repos: RegistryRepositories) -> Self {
        Self { repos }
    }
}

#[async_trait]
impl CommandHandler<RegisterHousehold> for RegisterHouseholdHandler {
    async fn handle(&self, ctx: &AppContext, cmd: RegisterHousehold) -> Result<HouseholdId, AppError> {
        let household_no = HouseholdNo::new(cmd.household_no);
        if household_no.is_blank() {
            return Err(AppError::required("household_no"));
        }
        let entry_date = cmd.entry_date.ok_or_else(|| AppError::required("entry_date"))?;
        if cmd.house_no.trim().is_empty() {
            return Err(AppError::required("house_no"));
        }
        if cmd.family_head.trim().is_empty() {
            return Err(AppError::required("family_head"));
        }

        let hierarchy = self.repos.locations.load_hierarchy().await?;
        hierarchy.validate_selection(&cmd.location)?;

        let household = Household::register(
            HouseholdId::generate(),
            NewHousehold::builder()
                .household_no(household_no)
                .entry_date(entry_date)
                .house_no(cmd.house_no)
                .family_head(cmd.family_head)
                .location(cmd.location)
                .build(),
        )?;
        let id = household.id().clone();
        let household_no = household.household_no.clone();

        self.repos.households.insert(household).await?;
        info!(
            household_id = %id,
            %household_no,
            actor_id = ?ctx.actor_id,
            "household registered"
        );
        Ok(id)
    }
}
