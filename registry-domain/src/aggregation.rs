//! 统计汇总管道
//!
//! 把已关联户与行政区划的成员行汇总为按村统计结果：
//! - 先按死亡状态过滤，再分桶
//! - 以村标识为键；无法解析的村统一归入 `VillageKey::Unknown`
//! - 户数为去重后的户号个数，空户号只计入人口
//! - 结果按人口数降序，稳定排序保证并列时按首次出现顺序
//!
//! 全部为纯函数，不修改输入。
//!
use crate::config::RegistryConfig;
use crate::directory::{HouseholdDirectory, RegistryEntry};
use crate::ids::LocationId;
use crate::location::Resolved;
use crate::person::Person;
use crate::value_object::{GenderClass, GenderTokens, HouseholdNo};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// 死亡状态过滤
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathStatusFilter {
    #[default]
    AliveOnly,
    DeceasedOnly,
    All,
}

impl DeathStatusFilter {
    pub fn admits(self, is_deceased: bool) -> bool {
        match self {
            DeathStatusFilter::AliveOnly => !is_deceased,
            DeathStatusFilter::DeceasedOnly => is_deceased,
            DeathStatusFilter::All => true,
        }
    }
}

/// 汇总桶的键
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VillageKey {
    Known(LocationId),
    Unknown,
}

impl RegistryEntry {
    pub fn village_key(&self) -> VillageKey {
        match &self.placement.village_id {
            Some(id) => VillageKey::Known(id.clone()),
            None => VillageKey::Unknown,
        }
    }
}

/// 单村统计
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VillageAggregate {
    pub key: VillageKey,
    pub village_name: Resolved,
    pub male_count: usize,
    pub female_count: usize,
    /// 无法归类为男/女的人数
    pub other_gender_count: usize,
    pub family_count: usize,
    pub household_count: usize,
}

impl VillageAggregate {
    fn empty(key: VillageKey, village_name: Resolved) -> Self {
        Self {
            key,
            village_name,
            male_count: 0,
            female_count: 0,
            other_gender_count: 0,
            family_count: 0,
            household_count: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryTotals {
    pub total_families: usize,
    pub total_households: usize,
    pub male_total: usize,
    pub female_total: usize,
    pub other_gender_total: usize,
}

/// 图表序列，`labels` 与 `values` 一一对应
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryReport {
    pub villages: Vec<VillageAggregate>,
    pub totals: RegistryTotals,
}

impl RegistryReport {
    /// 各村人口
    pub fn population_series(&self, unknown_label: &str) -> ChartSeries {
        self.series(unknown_label, |village| village.family_count)
    }

    /// 各村户数
    pub fn household_series(&self, unknown_label: &str) -> ChartSeries {
        self.series(unknown_label, |village| village.household_count)
    }

    /// 男/女合计
    pub fn gender_totals(&self) -> (usize, usize) {
        (self.totals.male_total, self.totals.female_total)
    }

    fn series(&self, unknown_label: &str, value: impl Fn(&VillageAggregate) -> usize) -> ChartSeries {
        let (labels, values) = self
            .villages
            .iter()
            .map(|village| (village.village_name.label_or(unknown_label).to_string(), value(village)))
            .unzip();
        ChartSeries { labels, values }
    }
}

#[derive(Debug, Clone)]
pub struct AggregationPipeline {
    genders: GenderTokens,
}

impl AggregationPipeline {
    pub fn new(genders: GenderTokens) -> Self {
        Self { genders }
    }

    pub fn from_config(config: &RegistryConfig) -> Self {
        Self::new(config.gender_tokens())
    }

    pub fn genders(&self) -> &GenderTokens {
        &self.genders
    }

    /// 先经户籍目录关联再汇总
    pub fn aggregate_people(
        &self,
        people: &[Person],
        directory: &HouseholdDirectory<'_>,
        mode: DeathStatusFilter,
    ) -> RegistryReport {
        let entries = directory.entries(people);
        self.aggregate(&entries, mode)
    }

    pub fn aggregate(&self, entries: &[RegistryEntry], mode: DeathStatusFilter) -> RegistryReport {
        let mut villages: Vec<VillageAggregate> = Vec::new();
        let mut bucket_index: HashMap<VillageKey, usize> = HashMap::new();
        let mut village_households: Vec<HashSet<&HouseholdNo>> = Vec::new();
        let mut all_households: HashSet<&HouseholdNo> = HashSet::new();
        let mut totals = RegistryTotals::default();

        for entry in entries.iter().filter(|entry| mode.admits(entry.person.is_deceased)) {
            let key = entry.village_key();
            let slot = match bucket_index.get(&key) {
                Some(&slot) => slot,
                None => {
                    let slot = villages.len();
                    villages.push(VillageAggregate::empty(key.clone(), entry.path().village.clone()));
                    village_households.push(HashSet::new());
                    bucket_index.insert(key, slot);
                    slot
                }
            };

            let village = &mut villages[slot];
            village.family_count += 1;
            totals.total_families += 1;

            match self.genders.classify(&entry.person.gender) {
                GenderClass::Male => {
                    village.male_count += 1;
                    totals.male_total += 1;
                }
                GenderClass::Female => {
                    village.female_count += 1;
                    totals.female_total += 1;
                }
                GenderClass::Other => {
                    village.other_gender_count += 1;
                    totals.other_gender_total += 1;
                }
            }

            let household_no = &entry.person.household_no;
            if !household_no.is_blank() {
                village_households[slot].insert(household_no);
                all_households.insert(household_no);
            }
        }

        for (village, households) in villages.iter_mut().zip(&village_households) {
            village.household_count = households.len();
        }
        totals.total_households = all_households.len();

        // sort_by 为稳定排序
        villages.sort_by(|a, b| b.family_count.cmp(&a.family_count));

        debug!(
            villages = villages.len(),
            families = totals.total_families,
            households = totals.total_households,
            ?mode,
            "registry aggregated"
        );

        RegistryReport { villages, totals }
    }
}

impl Default for AggregationPipeline {
    fn default() -> Self {
        Self::from_config(&RegistryConfig::default())
    }
}
