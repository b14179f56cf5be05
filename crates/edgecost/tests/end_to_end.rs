//! End-to-end flow: profile registration, per-request specialization,
//! attribute queries through the whole stack.

use edgecost::prelude::*;
use edgecost_test::{translator, MockRegion, MockRoad};

/// Local codes: 0 motorway, 1 toll=yes, 2 residential.
fn region() -> MockRegion {
    MockRegion::with_pairs(
        7,
        &[
            ("highway", "motorway"),
            ("toll", "yes"),
            ("highway", "residential"),
        ],
    )
}

fn build_registry() -> ConfigBuilder {
    let session = translator();

    let mut car = ProfileBuilder::new(ProfileKind::Car, session);
    car.set_attribute("minDefaultSpeed", "18");
    car.register_boolean_parameter("avoid_toll", "Avoid tolls", "Never route over toll roads");

    let speed = car.rule_set(AttributeKind::Speed);
    speed
        .add_rule("110")
        .unwrap()
        .tag_value("highway", Some("motorway"), false);
    speed
        .add_rule("40")
        .unwrap()
        .tag_value("highway", Some("residential"), false);

    car.rule_set(AttributeKind::Access)
        .add_rule("-1")
        .unwrap()
        .tag_value("toll", Some("yes"), false)
        .parameter("avoid_toll", false);

    let mut registry = ConfigBuilder::new();
    registry.set_default_profile("car");
    registry.add_profile("car", car.build());
    registry
}

#[test]
fn test_route_request_flow() {
    let registry = build_registry();

    let toll_motorway = MockRoad::new(region()).with_types(&[0, 1]);
    let residential = MockRoad::new(region()).with_types(&[2]);

    // Plain request: toll roads stay open.
    let config = registry.build("car", 0, &[]);
    assert!(config.profile.accepts(&toll_motorway));
    assert!((config.profile.speed(&toll_motorway) - 110.0 / 3.6).abs() < 1e-9);
    assert!((config.profile.speed(&residential) - 40.0 / 3.6).abs() < 1e-9);

    // Toll-averse request: the gated access rule turns on.
    let config = registry.build("car", 0, &["avoid_toll"]);
    assert!(!config.profile.accepts(&toll_motorway));
    assert!(config.profile.accepts(&residential));
}

#[test]
fn test_parameter_metadata_survives_specialization() {
    let registry = build_registry();
    let config = registry.build("car", 0, &["avoid_toll"]);
    let params = config.profile.parameters();
    assert_eq!(params.len(), 1);
    assert_eq!(params[0].id, "avoid_toll");
    assert_eq!(params[0].kind, ParameterKind::Boolean);
}

#[test]
fn test_codes_are_shared_across_requests() {
    let registry = build_registry();
    let road = MockRoad::new(region()).with_types(&[0]);

    let first = registry.build("car", 0, &[]);
    let second = registry.build("car", 0, &["avoid_toll"]);
    // Both requests resolve the same region codes through the shared
    // session translator.
    assert_eq!(first.profile.speed(&road), second.profile.speed(&road));
}
