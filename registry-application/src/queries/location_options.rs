use crate::dto::Dto;
use crate::repositories::RegistryRepositories;
use crate::{context::AppContext, error::AppError, query::Query, query_handler::QueryHandler};
use async_trait::async_trait;
use registry_domain::ids::LocationId;
use registry_domain::location::LocationLevel;
use serde::Serialize;

/// 某一级的可选项；省/邦级忽略 `parent`
#[derive(Debug, Clone)]
pub struct LocationOptionsQuery {
    pub level: LocationLevel,
    pub parent: Option<LocationId>,
}

impl Query for LocationOptionsQuery {
    const NAME: &'static str = "LocationOptionsQuery";
    type Dto = LocationOptionsDto;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationOptionDto {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationOptionsDto {
    pub level: LocationLevel,
    pub options: Vec<LocationOptionDto>,
}

impl Dto for LocationOptionsDto {}

pub struct LocationOptionsQueryHandler {
    repos: RegistryRepositories,
}

impl LocationOptionsQueryHandler {
    pub fn new(repos: RegistryRepositories) -> Self {
        Self { repos }
    }
}

#[async_trait]
impl QueryHandler<LocationOptionsQuery> for LocationOptionsQueryHandler {
    async fn handle(&self, _ctx: &AppContext, q: LocationOptionsQuery) -> Result<LocationOptionsDto, AppError> {
        let hierarchy = self.repos.locations.load_hierarchy().await?;
        let options = hierarchy
            .options_for(q.level, q.parent.as_ref())
            .into_iter()
            .map(|node| LocationOptionDto {
                id: node.id.to_string(),
                name: node.name.clone(),
            })
            .collect();
        Ok(LocationOptionsDto {
            level: q.level,
            options,
        })
    }
}
