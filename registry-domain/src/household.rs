//! 户（Household）
//!
use crate::error::DomainResult;
use crate::ids::HouseholdId;
use crate::location::LocationSelection;
use crate::value_object::{HouseholdNo, ValueObject};
use bon::Builder;
use chrono::NaiveDate;
use registry_macros::entity;

/// 以户号为业务主键的居住单元，挂靠在一个村下
#[entity(id = HouseholdId)]
#[derive(PartialEq, Eq)]
pub struct Household {
    pub household_no: HouseholdNo,
    pub entry_date: Option<NaiveDate>,
    pub house_no: String,
    pub family_head: String,
    /// 五级行政区划选择（原始数据同时保存五级标识）
    pub location: LocationSelection,
}

/// 登记一户所需的信息
#[derive(Debug, Clone, Builder)]
pub struct NewHousehold {
    pub household_no: HouseholdNo,
    pub entry_date: Option<NaiveDate>,
    pub house_no: String,
    pub family_head: String,
    pub location: LocationSelection,
}

impl Household {
    pub fn register(id: HouseholdId, details: NewHousehold) -> DomainResult<Self> {
        details.household_no.validate()?;
        let mut household = <Self as crate::entity::Entity>::new(id, 0);
        household.household_no = details.household_no;
        household.entry_date = details.entry_date;
        household.house_no = details.house_no;
        household.family_head = details.family_head;
        household.location = details.location;
        Ok(household)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;

    #[test]
    fn register_requires_household_no() {
        let details = NewHousehold::builder()
            .household_no(HouseholdNo::new(" "))
            .house_no("12".to_string())
            .family_head("U Ba".to_string())
            .location(LocationSelection::new())
            .build();
        assert!(Household::register(HouseholdId::generate(), details).is_err());
    }

    #[test]
    fn register_starts_at_version_zero() {
        let details = NewHousehold::builder()
            .household_no(HouseholdNo::new("H-1"))
            .house_no("12".to_string())
            .family_head("U Ba".to_string())
            .location(LocationSelection::complete("s", "d", "t", "w", "v"))
            .build();
        let household = Household::register(HouseholdId::from("hh-1"), details).unwrap();
        assert_eq!(household.version(), 0);
        assert_eq!(household.id().as_str(), "hh-1");
        assert_eq!(household.location.village().map(|v| v.as_str()), Some("v"));
    }
}
