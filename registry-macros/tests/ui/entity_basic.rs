use registry_domain::entity::Entity;
use registry_macros::{entity, entity_id};

#[entity_id]
struct MemberId(String);

#[entity(id = MemberId)]
struct Member {
    name: String,
    is_deceased: bool,
}

fn main() {
    let member = Member::new(MemberId::new("m-1".to_string()), 3);
    assert_eq!(member.id().as_inner(), "m-1");
    assert_eq!(member.version(), 3);
    assert!(member.name.is_empty());
    assert!(!member.is_deceased);

    let cloned = member.clone();
    let _ = format!("{:?}", cloned);
}
