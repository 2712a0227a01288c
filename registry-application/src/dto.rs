use registry_domain::dates::format_display_date;
use registry_domain::directory::RegistryEntry;
use registry_domain::entity::Entity;
use registry_domain::location::DisplayPath;
use registry_domain::pagination::Page;
use chrono::NaiveDate;
use serde::Serialize;

/// 数据传输对象（DTO）
///
/// 应用层的输出载体，序列化友好，与领域模型解耦。
pub trait Dto: Serialize + Send + Sync + 'static {}

impl<T: Dto> Dto for Page<T> {}

/// 五级地名，无法解析的一级使用配置中的占位文本
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationNamesDto {
    pub state_region: String,
    pub district: String,
    pub township: String,
    pub ward_village_tract: String,
    pub village: String,
}

impl LocationNamesDto {
    pub fn from_path(path: &DisplayPath, unknown_label: &str) -> Self {
        Self {
            state_region: path.state_region.label_or(unknown_label).to_string(),
            district: path.district.label_or(unknown_label).to_string(),
            township: path.township.label_or(unknown_label).to_string(),
            ward_village_tract: path.ward_village_tract.label_or(unknown_label).to_string(),
            village: path.village.label_or(unknown_label).to_string(),
        }
    }
}

/// 成员列表的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyRowDto {
    pub id: String,
    pub name: String,
    pub gender: String,
    /// `dd/mm/yyyy`
    pub date_of_birth: String,
    pub age: Option<u32>,
    pub nrc_id: String,
    pub father_name: String,
    pub mother_name: String,
    pub household_no: String,
    pub is_deceased: bool,
    pub location: LocationNamesDto,
}

impl Dto for FamilyRowDto {}

impl FamilyRowDto {
    pub fn from_entry(entry: &RegistryEntry, today: NaiveDate, unknown_label: &str) -> Self {
        let person = &entry.person;
        Self {
            id: person.id().to_string(),
            name: person.name.clone(),
            gender: person.gender.clone(),
            date_of_birth: format_display_date(person.date_of_birth),
            age: person.age_on(today),
            nrc_id: person.nrc_id.clone(),
            father_name: person.father_name.clone(),
            mother_name: person.mother_name.clone(),
            household_no: person.household_no.to_string(),
            is_deceased: person.is_deceased,
            location: LocationNamesDto::from_path(entry.path(), unknown_label),
        }
    }
}
