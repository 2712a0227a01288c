use crate::dto::Dto;
use crate::repositories::RegistryRepositories;
use crate::{context::AppContext, error::AppError, query::Query, query_handler::QueryHandler};
use async_trait::async_trait;
use registry_domain::config::RegistryConfig;
use registry_domain::dates::format_display_date;
use registry_domain::disability::{DisabilityEntry, DisabilitySearch};
use registry_domain::entity::Entity;
use registry_domain::ids::PersonId;
use registry_domain::pagination::{Page, paginate};
use registry_domain::person::Person;
use registry_domain::specification::Specification;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// 残疾记录列表
#[derive(Debug, Clone, Default)]
pub struct DisabilityListQuery {
    pub search: Option<String>,
    pub page: usize,
}

impl Query for DisabilityListQuery {
    const NAME: &'static str = "DisabilityListQuery";
    type Dto = Page<DisabilityRowDto>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisabilityRowDto {
    pub id: String,
    pub person_id: String,
    pub name: String,
    pub nrc_id: String,
    pub gender: String,
    pub date_of_birth: String,
    pub type_name: String,
    pub description: String,
}

impl Dto for DisabilityRowDto {}

impl DisabilityRowDto {
    fn from_entry(entry: DisabilityEntry, unknown_label: &str) -> Self {
        let DisabilityEntry { disability, person } = entry;
        let (name, nrc_id, gender, date_of_birth) = match person {
            Some(person) => (
                person.name,
                person.nrc_id,
                person.gender,
                format_display_date(person.date_of_birth),
            ),
            None => (unknown_label.to_string(), String::new(), String::new(), String::new()),
        };
        Self {
            id: disability.id().to_string(),
            person_id: disability.person_id.to_string(),
            name,
            nrc_id,
            gender,
            date_of_birth,
            type_name: disability.type_name,
            description: disability.description,
        }
    }
}

pub struct DisabilityListQueryHandler {
    repos: RegistryRepositories,
    config: Arc<RegistryConfig>,
}

impl DisabilityListQueryHandler {
    pub fn new(repos: RegistryRepositories, config: Arc<RegistryConfig>) -> Self {
        Self { repos, config }
    }
}

#[async_trait]
impl QueryHandler<DisabilityListQuery> for DisabilityListQueryHandler {
    async fn handle(&self, _ctx: &AppContext, q: DisabilityListQuery) -> Result<Page<DisabilityRowDto>, AppError> {
        let disabilities = self.repos.disabilities.list().await?;
        let people: HashMap<PersonId, Person> = self
            .repos
            .people
            .list()
            .await?
            .into_iter()
            .map(|person| (person.id().clone(), person))
            .collect();

        let search = DisabilitySearch::new(q.search.as_deref().unwrap_or_default());
        let rows: Vec<DisabilityRowDto> = disabilities
            .into_iter()
            .map(|disability| DisabilityEntry {
                person: people.get(&disability.person_id).cloned(),
                disability,
            })
            .filter(|entry| search.is_satisfied_by(entry))
            .map(|entry| DisabilityRowDto::from_entry(entry, &self.config.unknown_label))
            .collect();

        Ok(paginate(rows, q.page, self.config.list_page_size))
    }
}
