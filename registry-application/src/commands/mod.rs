//! 写用例
//!
mod delete_disability;
mod register_death;
mod register_disability;
mod register_family_member;
mod register_household;

pub use delete_disability::{DeleteDisability, DeleteDisabilityHandler};
pub use register_death::{RegisterDeath, RegisterDeathHandler};
pub use register_disability::{RegisterDisability, RegisterDisabilityHandler};
pub use register_family_member::{RegisterFamilyMember, RegisterFamilyMemberHandler};
pub use register_household::{RegisterHousehold, RegisterHouseholdHandler};
