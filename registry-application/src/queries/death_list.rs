use crate::dto::{Dto, LocationNamesDto};
use crate::repositories::{RegistryRepositories, RegistrySnapshot};
use crate::{context::AppContext, error::AppError, query::Query, query_handler::QueryHandler};
use async_trait::async_trait;
use registry_domain::config::RegistryConfig;
use registry_domain::dates::format_display_date;
use registry_domain::entity::Entity;
use registry_domain::ids::PersonId;
use registry_domain::location::DisplayPath;
use registry_domain::pagination::{Page, paginate};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// 死亡记录列表；`search` 对姓名、死亡地点、申报人做忽略大小写的子串匹配
#[derive(Debug, Clone, Default)]
pub struct DeathListQuery {
    pub search: Option<String>,
    pub page: usize,
}

impl Query for DeathListQuery {
    const NAME: &'static str = "DeathListQuery";
    type Dto = Page<DeathRowDto>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeathRowDto {
    pub id: String,
    pub person_id: String,
    /// 成员已被删除时为空
    pub name: String,
    pub household_no: String,
    /// `dd/mm/yyyy`
    pub death_date: String,
    pub death_place: String,
    pub complainant: String,
    pub remark: String,
    pub location: LocationNamesDto,
}

impl Dto for DeathRowDto {}

pub struct DeathListQueryHandler {
    repos: RegistryRepositories,
    config: Arc<RegistryConfig>,
}

impl DeathListQueryHandler {
    pub fn new(repos: RegistryRepositories, config: Arc<RegistryConfig>) -> Self {
        Self { repos, config }
    }
}

#[async_trait]
impl QueryHandler<DeathListQuery> for DeathListQueryHandler {
    async fn handle(&self, _ctx: &AppContext, q: DeathListQuery) -> Result<Page<DeathRowDto>, AppError> {
        let snapshot = RegistrySnapshot::load(&self.repos).await?;
        let records = self.repos.deaths.list().await?;

        let directory = snapshot.directory();
        let people: HashMap<&PersonId, _> = snapshot
            .people
            .iter()
            .map(|person| (person.id(), person))
            .collect();
        let needle = q
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_default();
        let unknown = self.config.unknown_label.as_str();

        let rows: Vec<DeathRowDto> = records
            .into_iter()
            .filter_map(|record| {
                let person = people.get(&record.person_id).copied();
                let name = person.map(|p| p.name.clone()).unwrap_or_default();
                let hit = |value: &str| value.to_lowercase().contains(&needle);
                if !needle.is_empty()
                    && !(hit(&name) || hit(&record.death_place) || hit(&record.complainant))
                {
                    return None;
                }

                let (household_no, path) = match person {
                    Some(person) => (
                        person.household_no.to_string(),
                        directory.locate(&person.household_no).path,
                    ),
                    None => (String::new(), DisplayPath::unknown()),
                };
                Some(DeathRowDto {
                    id: record.id().to_string(),
                    person_id: record.person_id.to_string(),
                    name,
                    household_no,
                    death_date: format_display_date(Some(record.death_date)),
                    death_place: record.death_place,
                    complainant: record.complainant,
                    remark: record.remark,
                    location: LocationNamesDto::from_path(&path, unknown),
                })
            })
            .collect();

        Ok(paginate(rows, q.page, self.config.list_page_size))
    }
}
