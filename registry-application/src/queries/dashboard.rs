use crate::dto::{Dto, FamilyRowDto};
use crate::repositories::{RegistryRepositories, RegistrySnapshot};
use crate::{context::AppContext, error::AppError, query::Query, query_handler::QueryHandler};
use async_trait::async_trait;
use registry_domain::aggregation::{
    AggregationPipeline, ChartSeries, DeathStatusFilter, RegistryTotals, VillageAggregate,
};
use registry_domain::config::RegistryConfig;
use registry_domain::pagination::{Page, paginate};
use registry_domain::specification::PersonFilter;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// 看板：先按筛选项过滤成员，再按死亡状态汇总
#[derive(Debug, Clone, Default)]
pub struct DashboardQuery {
    pub filter: PersonFilter,
    pub death_status: DeathStatusFilter,
    /// 明细表页码，从 0 开始
    pub page: usize,
}

impl Query for DashboardQuery {
    const NAME: &'static str = "DashboardQuery";
    type Dto = DashboardDto;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenderTotalsDto {
    pub male: usize,
    pub female: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardDto {
    pub villages: Vec<VillageAggregate>,
    pub totals: RegistryTotals,
    pub population_series: ChartSeries,
    pub household_series: ChartSeries,
    pub gender_totals: GenderTotalsDto,
    pub total_deaths: usize,
    pub rows: Page<FamilyRowDto>,
}

impl Dto for DashboardDto {}

pub struct DashboardQueryHandler {
    repos: RegistryRepositories,
    config: Arc<RegistryConfig>,
    pipeline: AggregationPipeline,
}

impl DashboardQueryHandler {
    pub fn new(repos: RegistryRepositories, config: Arc<RegistryConfig>) -> Self {
        let pipeline = AggregationPipeline::from_config(&config);
        Self {
            repos,
            config,
            pipeline,
        }
    }
}

#[async_trait]
impl QueryHandler<DashboardQuery> for DashboardQueryHandler {
    async fn handle(&self, ctx: &AppContext, q: DashboardQuery) -> Result<DashboardDto, AppError> {
        let today = ctx.today();
        let snapshot = RegistrySnapshot::load(&self.repos).await?;
        let entries = q.filter.apply(snapshot.entries(), today);

        let report = self.pipeline.aggregate(&entries, q.death_status);
        let total_deaths = self.repos.deaths.count().await?;
        debug!(
            matched = entries.len(),
            villages = report.villages.len(),
            "dashboard computed"
        );

        let unknown = self.config.unknown_label.as_str();
        let rows: Vec<_> = entries
            .iter()
            .filter(|entry| q.death_status.admits(entry.person.is_deceased))
            .map(|entry| FamilyRowDto::from_entry(entry, today, unknown))
            .collect();
        let (male, female) = report.gender_totals();

        Ok(DashboardDto {
            population_series: report.population_series(unknown),
            household_series: report.household_series(unknown),
            gender_totals: GenderTotalsDto { male, female },
            villages: report.villages,
            totals: report.totals,
            total_deaths,
            rows: paginate(rows, q.page, self.config.dashboard_page_size),
        })
    }
}
