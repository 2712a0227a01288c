use crate::dto::FamilyRowDto;
use crate::repositories::{RegistryRepositories, RegistrySnapshot};
use crate::{context::AppContext, error::AppError, query::Query, query_handler::QueryHandler};
use async_trait::async_trait;
use registry_domain::config::RegistryConfig;
use registry_domain::pagination::{Page, paginate};
use registry_domain::specification::PersonFilter;
use std::sync::Arc;

/// 家庭成员列表
#[derive(Debug, Clone, Default)]
pub struct FamilyListQuery {
    pub filter: PersonFilter,
    pub page: usize,
}

impl Query for FamilyListQuery {
    const NAME: &'static str = "FamilyListQuery";
    type Dto = Page<FamilyRowDto>;
}

pub struct FamilyListQueryHandler {
    repos: RegistryRepositories,
    config: Arc<RegistryConfig>,
}

impl FamilyListQueryHandler {
    pub fn new(repos: RegistryRepositories, config: Arc<RegistryConfig>) -> Self {
        Self { repos, config }
    }
}

#[async_trait]
impl QueryHandler<FamilyListQuery> for FamilyListQueryHandler {
    async fn handle(&self, ctx: &AppContext, q: FamilyListQuery) -> Result<Page<FamilyRowDto>, AppError> {
        let today = ctx.today();
        let snapshot = RegistrySnapshot::load(&self.repos).await?;
        let rows: Vec<FamilyRowDto> = q
            .filter
            .apply(snapshot.entries(), today)
            .iter()
            .map(|entry| FamilyRowDto::from_entry(entry, today, &self.config.unknown_label))
            .collect();
        Ok(paginate(rows, q.page, self.config.list_page_size))
    }
}
