//! 规约（Specification）
//!
//! 列表页的筛选条件以规约表达，可自由组合；`PersonFilter` 把页面上的
//! 各个筛选项转换为一条组合规约，未设置的条件视为恒真。
//!
use crate::aggregation::DeathStatusFilter;
use crate::dates::format_input_date;
use crate::directory::RegistryEntry;
use crate::location::LocationLevel;
use bon::Builder;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub trait Specification<T> {
    fn is_satisfied_by(&self, candidate: &T) -> bool;

    fn and<S>(self, other: S) -> And<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        And(self, other)
    }

    fn or<S>(self, other: S) -> Or<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        Or(self, other)
    }

    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not(self)
    }
}

impl<T> Specification<T> for Box<dyn Specification<T> + Send + Sync> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.as_ref().is_satisfied_by(candidate)
    }
}

pub struct And<A, B>(A, B);

impl<T, A: Specification<T>, B: Specification<T>> Specification<T> for And<A, B> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.0.is_satisfied_by(candidate) && self.1.is_satisfied_by(candidate)
    }
}

pub struct Or<A, B>(A, B);

impl<T, A: Specification<T>, B: Specification<T>> Specification<T> for Or<A, B> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.0.is_satisfied_by(candidate) || self.1.is_satisfied_by(candidate)
    }
}

pub struct Not<A>(A);

impl<T, A: Specification<T>> Specification<T> for Not<A> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        !self.0.is_satisfied_by(candidate)
    }
}

/// 运行时拼装的合取规约；为空时恒真
pub struct AllOf<T> {
    specs: Vec<Box<dyn Specification<T> + Send + Sync>>,
}

impl<T> AllOf<T> {
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    pub fn push(&mut self, spec: impl Specification<T> + Send + Sync + 'static) {
        self.specs.push(Box::new(spec));
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<T> Default for AllOf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Specification<T> for AllOf<T> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.specs.iter().all(|spec| spec.is_satisfied_by(candidate))
    }
}

/// 关键字搜索：忽略大小写的子串匹配
pub struct SearchText {
    needle: String,
}

impl SearchText {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
        }
    }

    fn hit(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }
}

impl Specification<RegistryEntry> for SearchText {
    fn is_satisfied_by(&self, entry: &RegistryEntry) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        let person = &entry.person;
        let date_of_birth = format_input_date(person.date_of_birth);
        [
            person.name.as_str(),
            person.gender.as_str(),
            person.father_name.as_str(),
            person.mother_name.as_str(),
            person.remark.as_str(),
            date_of_birth.as_str(),
            person.nrc_id.as_str(),
            person.household_no.as_str(),
        ]
        .into_iter()
        .chain(
            [
                &person.occupation,
                &person.education,
                &person.ethnicity,
                &person.religion,
            ]
            .into_iter()
            .filter_map(|value| value.as_deref()),
        )
        .any(|field| self.hit(field))
    }
}

pub struct GenderIs(pub String);

impl Specification<RegistryEntry> for GenderIs {
    fn is_satisfied_by(&self, entry: &RegistryEntry) -> bool {
        entry.person.gender == self.0
    }
}

pub struct HouseholdIs(pub String);

impl Specification<RegistryEntry> for HouseholdIs {
    fn is_satisfied_by(&self, entry: &RegistryEntry) -> bool {
        entry.person.household_no.as_str() == self.0.trim()
    }
}

/// 可精确筛选的成员属性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonAttribute {
    Occupation,
    Education,
    Ethnicity,
    Religion,
}

pub struct AttributeIs {
    pub attribute: PersonAttribute,
    pub value: String,
}

impl Specification<RegistryEntry> for AttributeIs {
    fn is_satisfied_by(&self, entry: &RegistryEntry) -> bool {
        let person = &entry.person;
        let field = match self.attribute {
            PersonAttribute::Occupation => &person.occupation,
            PersonAttribute::Education => &person.education,
            PersonAttribute::Ethnicity => &person.ethnicity,
            PersonAttribute::Religion => &person.religion,
        };
        field.as_deref() == Some(self.value.as_str())
    }
}

pub struct DeathStatusIs(pub DeathStatusFilter);

impl Specification<RegistryEntry> for DeathStatusIs {
    fn is_satisfied_by(&self, entry: &RegistryEntry) -> bool {
        self.0.admits(entry.person.is_deceased)
    }
}

/// 年龄区间（含端点）；无出生日期的成员不满足
pub struct AgeBetween {
    pub min: Option<u32>,
    pub max: Option<u32>,
    pub today: NaiveDate,
}

impl Specification<RegistryEntry> for AgeBetween {
    fn is_satisfied_by(&self, entry: &RegistryEntry) -> bool {
        let Some(age) = entry.person.age_on(self.today) else {
            return false;
        };
        self.min.is_none_or(|min| age >= min) && self.max.is_none_or(|max| age <= max)
    }
}

/// 按某一级的显示名称筛选
pub struct LocatedIn {
    pub level: LocationLevel,
    pub name: String,
}

impl Specification<RegistryEntry> for LocatedIn {
    fn is_satisfied_by(&self, entry: &RegistryEntry) -> bool {
        entry.path().get(self.level).name() == Some(self.name.as_str())
    }
}

/// 家庭成员列表的筛选项
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct PersonFilter {
    pub search: Option<String>,
    pub gender: Option<String>,
    pub household_no: Option<String>,
    pub occupation: Option<String>,
    pub education: Option<String>,
    pub ethnicity: Option<String>,
    pub religion: Option<String>,
    pub death_status: Option<DeathStatusFilter>,
    pub state_region: Option<String>,
    pub district: Option<String>,
    pub township: Option<String>,
    pub ward_village_tract: Option<String>,
    pub village: Option<String>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

impl PersonFilter {
    pub fn to_specification(&self, today: NaiveDate) -> AllOf<RegistryEntry> {
        let mut spec = AllOf::new();

        if let Some(query) = active(&self.search) {
            spec.push(SearchText::new(query));
        }
        if let Some(gender) = active(&self.gender) {
            spec.push(GenderIs(gender.to_string()));
        }
        if let Some(household_no) = active(&self.household_no) {
            spec.push(HouseholdIs(household_no.to_string()));
        }

        let attributes = [
            (PersonAttribute::Occupation, &self.occupation),
            (PersonAttribute::Education, &self.education),
            (PersonAttribute::Ethnicity, &self.ethnicity),
            (PersonAttribute::Religion, &self.religion),
        ];
        for (attribute, value) in attributes {
            if let Some(value) = active(value) {
                spec.push(AttributeIs {
                    attribute,
                    value: value.to_string(),
                });
            }
        }

        if let Some(status) = self.death_status {
            spec.push(DeathStatusIs(status));
        }

        let locations = [
            (LocationLevel::StateRegion, &self.state_region),
            (LocationLevel::District, &self.district),
            (LocationLevel::Township, &self.township),
            (LocationLevel::WardVillageTract, &self.ward_village_tract),
            (LocationLevel::Village, &self.village),
        ];
        for (level, name) in locations {
            if let Some(name) = active(name) {
                spec.push(LocatedIn {
                    level,
                    name: name.to_string(),
                });
            }
        }

        if self.min_age.is_some() || self.max_age.is_some() {
            spec.push(AgeBetween {
                min: self.min_age,
                max: self.max_age,
                today,
            });
        }

        spec
    }

    /// 保留输入顺序
    pub fn apply(&self, entries: impl IntoIterator<Item = RegistryEntry>, today: NaiveDate) -> Vec<RegistryEntry> {
        let spec = self.to_specification(today);
        entries
            .into_iter()
            .filter(|entry| spec.is_satisfied_by(entry))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::Placement;
    use crate::ids::{LocationId, PersonId};
    use crate::location::{DisplayPath, Resolved};
    use crate::person::{NewFamilyMember, Person};
    use crate::value_object::HouseholdNo;

    struct Even;
    impl Specification<i32> for Even {
        fn is_satisfied_by(&self, candidate: &i32) -> bool {
            candidate % 2 == 0
        }
    }

    struct Positive;
    impl Specification<i32> for Positive {
        fn is_satisfied_by(&self, candidate: &i32) -> bool {
            *candidate > 0
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn entry(name: &str, dob: Option<NaiveDate>, village: &str) -> RegistryEntry {
        let person = Person::enroll(
            PersonId::generate(),
            NewFamilyMember::builder()
                .name(name.to_string())
                .maybe_date_of_birth(dob)
                .gender("မ".to_string())
                .nrc_id("12/ABC(N)123456".to_string())
                .household_no(HouseholdNo::new("H-7"))
                .occupation("Farmer".to_string())
                .build(),
        )
        .unwrap();
        let mut path = DisplayPath::unknown();
        path.village = Resolved::Name(village.to_string());
        RegistryEntry {
            person,
            placement: Placement {
                village_id: Some(LocationId::from(village)),
                path,
            },
        }
    }

    #[test]
    fn combinators() {
        assert!(Even.and(Positive).is_satisfied_by(&4));
        assert!(!Even.and(Positive).is_satisfied_by(&-4));
        assert!(Even.or(Positive).is_satisfied_by(&3));
        assert!(!Even.or(Positive).is_satisfied_by(&-3));
        assert!(Even.not().is_satisfied_by(&3));
        assert!(AllOf::<i32>::new().is_satisfied_by(&7));
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let e = entry("Daw Hla", None, "Alpha");
        assert!(SearchText::new("hla").is_satisfied_by(&e));
        assert!(SearchText::new("FARM").is_satisfied_by(&e));
        assert!(SearchText::new("abc(n)").is_satisfied_by(&e));
        assert!(SearchText::new("h-7").is_satisfied_by(&e));
        assert!(!SearchText::new("yangon").is_satisfied_by(&e));
    }

    #[test]
    fn search_matches_iso_date_of_birth() {
        let e = entry("Daw Hla", NaiveDate::from_ymd_opt(1990, 3, 15), "Alpha");
        assert!(SearchText::new("1990-03").is_satisfied_by(&e));
    }

    #[test]
    fn empty_filter_matches_everything() {
        let entries = vec![entry("a", None, "Alpha"), entry("b", None, "Beta")];
        let filter = PersonFilter::default();
        assert!(filter.to_specification(today()).is_empty());
        assert_eq!(filter.apply(entries, today()).len(), 2);
    }

    #[test]
    fn age_range_is_inclusive_and_excludes_unknown_age() {
        let thirty = entry("a", NaiveDate::from_ymd_opt(1994, 1, 1), "Alpha");
        let no_dob = entry("b", None, "Alpha");
        let filter = PersonFilter::builder().min_age(30).max_age(30).build();
        let kept = filter.apply(vec![thirty, no_dob], today());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].person.name, "a");
    }

    #[test]
    fn missing_dob_only_fails_age_criteria() {
        let no_dob = entry("b", None, "Alpha");
        let filter = PersonFilter::builder().village("Alpha".to_string()).build();
        assert_eq!(filter.apply(vec![no_dob], today()).len(), 1);
    }

    #[test]
    fn location_and_attribute_filters_combine() {
        let entries = vec![entry("a", None, "Alpha"), entry("b", None, "Beta")];
        let filter = PersonFilter::builder()
            .village("Beta".to_string())
            .occupation("Farmer".to_string())
            .death_status(DeathStatusFilter::AliveOnly)
            .build();
        let kept = filter.apply(entries, today());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].person.name, "b");

        let none = PersonFilter::builder().education("BA".to_string()).build();
        assert!(none.apply(vec![entry("a", None, "Alpha")], today()).is_empty());
    }

    #[test]
    fn blank_criteria_are_ignored() {
        let filter = PersonFilter::builder()
            .search("  ".to_string())
            .gender(String::new())
            .build();
        assert!(filter.to_specification(today()).is_empty());
    }
}
