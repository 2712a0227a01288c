use registry_domain::location::{
    LocationCascade, LocationHierarchy, LocationLevel, LocationNode, LocationSelection, OptionList,
    Resolved,
};
use registry_domain::persist::{InMemoryRegistryStore, LocationRepository};

fn nodes() -> Vec<LocationNode> {
    vec![
        LocationNode::root("sr-mdy", "Mandalay"),
        LocationNode::root("sr-sgg", "Sagaing"),
        LocationNode::child(LocationLevel::District, "d-kse", "Kyaukse", "sr-mdy"),
        LocationNode::child(LocationLevel::District, "d-empty", "Yamethin", "sr-mdy"),
        LocationNode::child(LocationLevel::District, "d-mwa", "Monywa", "sr-sgg"),
        LocationNode::child(LocationLevel::Township, "t-mtt", "Myittha", "d-kse"),
        LocationNode::child(LocationLevel::Township, "t-kse", "Kyaukse", "d-kse"),
        LocationNode::child(LocationLevel::WardVillageTract, "w-1", "Tract One", "t-mtt"),
        LocationNode::child(LocationLevel::Village, "v-b", "Beta", "w-1"),
        LocationNode::child(LocationLevel::Village, "v-a", "Alpha", "w-1"),
    ]
}

fn names(options: &OptionList) -> Vec<String> {
    options
        .as_slice()
        .unwrap_or_default()
        .iter()
        .map(|node| node.name.clone())
        .collect()
}

#[tokio::test]
async fn walk_down_the_hierarchy_from_store() -> anyhow::Result<()> {
    let store = InMemoryRegistryStore::with_locations(nodes());
    let hierarchy = store.load_hierarchy().await?;
    let mut cascade = LocationCascade::new(&hierarchy);

    assert_eq!(
        names(cascade.state().options(LocationLevel::StateRegion)),
        ["Mandalay", "Sagaing"]
    );

    cascade.select(LocationLevel::StateRegion, "sr-mdy");
    cascade.select(LocationLevel::District, "d-kse");
    assert_eq!(
        names(cascade.state().options(LocationLevel::Township)),
        ["Kyaukse", "Myittha"]
    );
    cascade.select(LocationLevel::Township, "t-mtt");
    cascade.select(LocationLevel::WardVillageTract, "w-1");
    let state = cascade.select(LocationLevel::Village, "v-a");
    assert!(state.selection().is_complete());
    assert!(hierarchy.validate_selection(state.selection()).is_ok());

    let path = cascade.display_path();
    assert_eq!(path.village, Resolved::Name("Alpha".into()));
    assert_eq!(path.township, Resolved::Name("Myittha".into()));
    Ok(())
}

#[test]
fn reselecting_state_region_resets_everything_below() {
    let hierarchy = LocationHierarchy::new(nodes());
    let mut cascade = LocationCascade::new(&hierarchy);
    for (level, id) in [
        (LocationLevel::StateRegion, "sr-mdy"),
        (LocationLevel::District, "d-kse"),
        (LocationLevel::Township, "t-mtt"),
        (LocationLevel::WardVillageTract, "w-1"),
        (LocationLevel::Village, "v-b"),
    ] {
        cascade.select(level, id);
    }

    let state = cascade.select(LocationLevel::StateRegion, "sr-sgg").clone();
    for level in LocationLevel::StateRegion.below() {
        assert!(state.selected(level).is_none(), "{level} still selected");
    }
    assert_eq!(names(state.options(LocationLevel::District)), ["Monywa"]);
    for level in LocationLevel::District.below() {
        assert!(!state.options(level).is_loaded());
    }
}

#[test]
fn childless_district_gives_empty_loaded_list() {
    let hierarchy = LocationHierarchy::new(nodes());
    let mut cascade = LocationCascade::new(&hierarchy);
    cascade.select(LocationLevel::StateRegion, "sr-mdy");
    let state = cascade.select(LocationLevel::District, "d-empty");

    let townships = state.options(LocationLevel::Township);
    assert!(townships.is_loaded());
    assert_eq!(townships.as_slice().map(|nodes| nodes.len()), Some(0));
    assert!(!state.options(LocationLevel::WardVillageTract).is_loaded());
}

#[test]
fn selection_with_deleted_nodes_resolves_partially() {
    let hierarchy = LocationHierarchy::new(nodes());
    let selection = LocationSelection::complete("sr-mdy", "d-gone", "t-mtt", "w-1", "v-a");

    let path = hierarchy.resolve_display_path(&selection);
    assert_eq!(path.state_region, Resolved::Name("Mandalay".into()));
    assert_eq!(path.district, Resolved::Unknown);
    assert_eq!(path.village, Resolved::Name("Alpha".into()));
    assert!(hierarchy.validate_selection(&selection).is_err());
}
