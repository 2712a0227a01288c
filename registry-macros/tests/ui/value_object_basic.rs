use registry_macros::value_object;

#[value_object]
struct HouseNo(String);

#[value_object]
enum Status {
    #[default]
    Alive,
    Deceased,
}

fn main() {
    let a = HouseNo("12".to_string());
    assert_eq!(a.clone(), a);
    assert_eq!(Status::default(), Status::Alive);
    assert_ne!(Status::Deceased, Status::Alive);
}
