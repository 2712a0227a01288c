//! 实体标识
//!
//! 均为字符串包装；新记录使用 UUID v4 生成标识。
//!
use registry_macros::entity_id;

#[entity_id]
pub struct LocationId(String);

#[entity_id]
pub struct HouseholdId(String);

#[entity_id]
pub struct PersonId(String);

#[entity_id]
pub struct DeathRecordId(String);

#[entity_id]
pub struct DisabilityId(String);

macro_rules! string_id_support {
    ($($ty:ident),* $(,)?) => {
        $(
            impl $ty {
                pub fn generate() -> Self {
                    Self::new(uuid::Uuid::new_v4().to_string())
                }

                pub fn as_str(&self) -> &str {
                    self.as_inner()
                }

                /// 空串或纯空白视为未选择/未填写
                pub fn is_blank(&self) -> bool {
                    self.as_inner().trim().is_empty()
                }
            }

            impl From<&str> for $ty {
                fn from(value: &str) -> Self {
                    Self::new(value.to_string())
                }
            }
        )*
    };
}

string_id_support!(LocationId, HouseholdId, PersonId, DeathRecordId, DisabilityId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_and_not_blank() {
        let a = PersonId::generate();
        let b = PersonId::generate();
        assert_ne!(a, b);
        assert!(!a.is_blank());
    }

    #[test]
    fn ids_serialize_transparently() {
        let id = LocationId::from("vil-7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"vil-7\"");
        assert_eq!(id.to_string(), "vil-7");
        assert!(LocationId::from("  ").is_blank());
    }
}
