//! Dispatcher and turn-cost tests over mock map data.

use std::collections::HashMap;
use std::f64::consts::PI;

use edgecost_core::AttributeKind;
use edgecost_profile::{ProfileBuilder, ProfileKind, RouterProfile, Traversal};
use edgecost_test::{translator, MockRegion, MockRoad};

/// A region carrying the pairs every test road may reference.
///
/// Local codes: 0 motorway, 1 track, 2 access=no, 3 traffic signals,
/// 4 barrier=gate, 5 oneway=yes.
fn region() -> MockRegion {
    MockRegion::with_pairs(
        1,
        &[
            ("highway", "motorway"),
            ("highway", "track"),
            ("access", "no"),
            ("highway", "traffic_signals"),
            ("barrier", "gate"),
            ("oneway", "yes"),
        ],
    )
}

fn car_profile() -> RouterProfile {
    let mut b = ProfileBuilder::new(ProfileKind::Car, translator());
    b.set_attribute("leftTurn", "30");
    b.set_attribute("rightTurn", "5");
    b.set_attribute("roundaboutTurn", "15");
    b.set_attribute("minDefaultSpeed", "36");

    b.rule_set(AttributeKind::Speed)
        .add_rule("90")
        .unwrap()
        .tag_value("highway", Some("motorway"), false);
    b.rule_set(AttributeKind::Priority)
        .add_rule("0.6")
        .unwrap()
        .tag_value("highway", Some("track"), false);
    b.rule_set(AttributeKind::Access)
        .add_rule("-1")
        .unwrap()
        .tag_value("access", Some("no"), false);
    b.rule_set(AttributeKind::ObstacleTime)
        .add_rule("25")
        .unwrap()
        .tag_value("barrier", Some("gate"), false);
    b.rule_set(AttributeKind::RoutingObstacle)
        .add_rule("2")
        .unwrap()
        .tag_value("barrier", Some("gate"), false);
    b.rule_set(AttributeKind::OneWay)
        .add_rule("1")
        .unwrap()
        .tag_value("oneway", Some("yes"), false);
    b.build()
}

#[test]
fn test_speed_rule_and_default_are_unit_converted() {
    let profile = car_profile();

    let motorway = MockRoad::new(region()).with_types(&[0]);
    assert!((profile.speed(&motorway) - 25.0).abs() < 1e-9);

    // minDefaultSpeed was set to 36 km/h.
    let unmatched = MockRoad::new(region()).with_types(&[1]);
    assert!((profile.speed(&unmatched) - 10.0).abs() < 1e-9);
}

#[test]
fn test_priority_defaults_to_neutral() {
    let profile = car_profile();
    let track = MockRoad::new(region()).with_types(&[1]);
    assert!((profile.speed_priority(&track) - 0.6).abs() < 1e-9);
    let motorway = MockRoad::new(region()).with_types(&[0]);
    assert!((profile.speed_priority(&motorway) - 1.0).abs() < 1e-9);
}

#[test]
fn test_access_governs_acceptance() {
    let profile = car_profile();
    let open = MockRoad::new(region()).with_types(&[0]);
    assert_eq!(profile.access(&open), 0);
    assert!(profile.accepts(&open));

    let closed = MockRoad::new(region()).with_types(&[0, 2]);
    assert_eq!(profile.access(&closed), -1);
    assert!(!profile.accepts(&closed));
}

#[test]
fn test_point_obstacles_default_to_zero() {
    let profile = car_profile();
    let road = MockRoad::new(region())
        .with_types(&[0])
        .with_point_types(2, &[4]);

    assert!((profile.obstacle_time(&road, 2) - 25.0).abs() < 1e-9);
    assert!((profile.routing_obstacle(&road, 2) - 2.0).abs() < 1e-9);
    // A point without codes short-circuits to 0.
    assert_eq!(profile.obstacle_time(&road, 0), 0.0);
    assert_eq!(profile.routing_obstacle(&road, 5), 0.0);
}

#[test]
fn test_oneway_defaults_to_bidirectional() {
    let profile = car_profile();
    let oneway = MockRoad::new(region()).with_types(&[5]);
    assert_eq!(profile.oneway(&oneway), 1);
    let plain = MockRoad::new(region()).with_types(&[0]);
    assert_eq!(profile.oneway(&plain), 0);
}

#[test]
fn test_restrictions_aware_defaults_to_true() {
    let profile = car_profile();
    assert!(profile.restrictions_aware());
}

#[test]
fn test_profile_specialization_gates_rules() {
    let mut b = ProfileBuilder::new(ProfileKind::Car, translator());
    b.rule_set(AttributeKind::Access)
        .add_rule("-1")
        .unwrap()
        .tag_value("highway", Some("track"), false)
        .parameter("avoid_unpaved", false);
    let base = b.build();

    let track = MockRoad::new(region()).with_types(&[1]);
    assert!(base.accepts(&track));

    let avoiding = base.specialize(&HashMap::from([("avoid_unpaved".to_string(), true)]));
    assert!(!avoiding.accepts(&track));
    // The base profile is untouched.
    assert!(base.accepts(&track));

    let relaxed = base.specialize(&HashMap::new());
    assert!(relaxed.accepts(&track));
}

// Turn-cost geometry.
//
// `prev` is traversed 0 -> 1 and reports its reversed bearing at point 1;
// `next` starts at its point 0. Bearings below are picked so the
// straight-through difference is exactly the `next` bearing.

fn prev_straight() -> MockRoad {
    MockRoad::new(region()).with_bearing(1, false, PI)
}

fn next_with_bearing(bearing: f64) -> MockRoad {
    MockRoad::new(region()).with_bearing(0, true, bearing)
}

#[test]
fn test_straight_through_costs_nothing() {
    let profile = car_profile();
    let prev_road = prev_straight();
    let next_road = next_with_bearing(0.0);
    let cost = profile.turn_cost(
        &Traversal::new(&next_road, 0, 1),
        &Traversal::new(&prev_road, 0, 1),
    );
    assert_eq!(cost, 0.0);
}

#[test]
fn test_near_reversal_costs_left_turn() {
    let profile = car_profile();
    let prev_road = prev_straight();
    let next_road = next_with_bearing(0.9 * PI);
    let cost = profile.turn_cost(
        &Traversal::new(&next_road, 0, 1),
        &Traversal::new(&prev_road, 0, 1),
    );
    assert_eq!(cost, 30.0);
}

#[test]
fn test_moderate_turn_costs_right_turn() {
    let profile = car_profile();
    let prev_road = prev_straight();
    let next_road = next_with_bearing(0.6 * PI);
    let cost = profile.turn_cost(
        &Traversal::new(&next_road, 0, 1),
        &Traversal::new(&prev_road, 0, 1),
    );
    assert_eq!(cost, 5.0);
}

#[test]
fn test_traffic_signals_absorb_the_turn() {
    let profile = car_profile();
    // Local code 3 decodes to highway=traffic_signals.
    let prev_road = prev_straight().with_point_types(1, &[3]);
    let next_road = next_with_bearing(0.9 * PI);
    let cost = profile.turn_cost(
        &Traversal::new(&next_road, 0, 1),
        &Traversal::new(&prev_road, 0, 1),
    );
    assert_eq!(cost, 0.0);
}

#[test]
fn test_roundabout_entry_costs_roundabout_penalty() {
    let profile = car_profile();
    let prev_road = prev_straight();
    let next_road = next_with_bearing(0.9 * PI).with_roundabout();
    let cost = profile.turn_cost(
        &Traversal::new(&next_road, 0, 1),
        &Traversal::new(&prev_road, 0, 1),
    );
    assert_eq!(cost, 15.0);
}

#[test]
fn test_roundabout_to_roundabout_is_not_an_entry() {
    let profile = car_profile();
    let prev_road = prev_straight().with_roundabout();
    let next_road = next_with_bearing(0.0).with_roundabout();
    let cost = profile.turn_cost(
        &Traversal::new(&next_road, 0, 1),
        &Traversal::new(&prev_road, 0, 1),
    );
    assert_eq!(cost, 0.0);
}
