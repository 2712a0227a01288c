use registry_macros::entity_id;
use uuid::Uuid;

#[entity_id]
struct VillageId(String);

#[entity_id(debug = false)]
struct TicketId(Uuid);

impl std::fmt::Debug for TicketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TicketId(..)")
    }
}

fn main() {
    let id: VillageId = "v-1".parse().unwrap();
    assert_eq!(id.to_string(), "v-1");
    assert!(id < VillageId::from("v-2".to_string()));
    let raw: String = id.into();
    assert_eq!(raw, "v-1");

    let ticket = TicketId::new(Uuid::new_v4());
    assert_eq!(format!("{:?}", ticket), "TicketId(..)");
}
