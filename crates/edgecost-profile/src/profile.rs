//! The router profile: six rule sets plus global scalar settings.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use edgecost_core::{AttributeKind, CodeList, RegionTranslator};
use edgecost_rules::RuleSet;

use crate::parameter::RoutingParameter;
use crate::road::{Road, Traversal};
use crate::turn::{turn_cost, TurnPenalties};

/// km/h per m/s. Configuration descriptions express speeds in km/h;
/// internally and towards path search everything is m/s.
pub(crate) const KMH_PER_MS: f64 = 3.6;

/// Base vehicle kind a profile derives from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ProfileKind {
    Car,
    Bicycle,
    Pedestrian,
}

impl ProfileKind {
    /// Looks a kind up by name, case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "car" => Some(ProfileKind::Car),
            "bicycle" => Some(ProfileKind::Bicycle),
            "pedestrian" => Some(ProfileKind::Pedestrian),
            _ => None,
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProfileKind::Car => "car",
            ProfileKind::Bicycle => "bicycle",
            ProfileKind::Pedestrian => "pedestrian",
        };
        f.write_str(name)
    }
}

/// Global scalar settings cached out of the attribute map.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Settings {
    pub(crate) restrictions_aware: bool,
    pub(crate) left_turn: f64,
    pub(crate) right_turn: f64,
    pub(crate) roundabout_turn: f64,
    /// m/s.
    pub(crate) min_default_speed: f64,
    /// m/s.
    pub(crate) max_default_speed: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            restrictions_aware: true,
            left_turn: 0.0,
            right_turn: 0.0,
            roundabout_turn: 0.0,
            min_default_speed: 10.0,
            max_default_speed: 10.0,
        }
    }
}

/// The attribute dispatcher path search queries per candidate edge/point.
///
/// A profile owns one ordered [`RuleSet`] per [`AttributeKind`], the
/// freeform attribute map with its cached scalar settings, and the
/// parameter descriptor registry. It is immutable after construction;
/// all query methods are pure reads and safe to call concurrently.
#[derive(Debug)]
pub struct RouterProfile {
    pub(crate) kind: ProfileKind,
    pub(crate) attributes: HashMap<String, String>,
    pub(crate) parameters: Vec<RoutingParameter>,
    pub(crate) rule_sets: [RuleSet; AttributeKind::COUNT],
    pub(crate) codes: Arc<RegionTranslator>,
    pub(crate) settings: Settings,
}

impl RouterProfile {
    /// The base vehicle kind.
    pub fn kind(&self) -> ProfileKind {
        self.kind
    }

    /// The rule set answering for `kind`.
    pub fn rule_set(&self, kind: AttributeKind) -> &RuleSet {
        &self.rule_sets[kind.index()]
    }

    /// Registered parameter descriptors, in registration order.
    pub fn parameters(&self) -> &[RoutingParameter] {
        &self.parameters
    }

    /// A freeform attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Whether a freeform attribute is set.
    pub fn contains_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Whether path search should honor restriction relations.
    pub fn restrictions_aware(&self) -> bool {
        self.settings.restrictions_aware
    }

    /// Lower bound for the default speed, m/s.
    pub fn min_default_speed(&self) -> f64 {
        self.settings.min_default_speed
    }

    /// Upper bound for the default speed, m/s.
    pub fn max_default_speed(&self) -> f64 {
        self.settings.max_default_speed
    }

    /// Speed of `road` in m/s; the configured minimum default speed when
    /// no rule matches.
    pub fn speed(&self, road: &dyn Road) -> f64 {
        let codes = self.way_codes(road);
        self.rule_set(AttributeKind::Speed)
            .evaluate_or(&codes, self.settings.min_default_speed * KMH_PER_MS)
            / KMH_PER_MS
    }

    /// Multiplicative speed priority of `road`; 1.0 when no rule matches.
    pub fn speed_priority(&self, road: &dyn Road) -> f64 {
        let codes = self.way_codes(road);
        self.rule_set(AttributeKind::Priority).evaluate_or(&codes, 1.0)
    }

    /// Access code of `road`; negative forbids, 0 (the default) permits.
    pub fn access(&self, road: &dyn Road) -> i32 {
        let codes = self.way_codes(road);
        self.rule_set(AttributeKind::Access).evaluate_int_or(&codes, 0)
    }

    /// Whether the profile admits `road` at all.
    pub fn accepts(&self, road: &dyn Road) -> bool {
        self.access(road) >= 0
    }

    /// Time penalty of the obstacle at `point`, seconds; 0 when the
    /// point carries no codes or no rule matches.
    pub fn obstacle_time(&self, road: &dyn Road, point: usize) -> f64 {
        self.point_value(AttributeKind::ObstacleTime, road, point)
    }

    /// Routing penalty of the obstacle at `point`; 0 by default.
    pub fn routing_obstacle(&self, road: &dyn Road, point: usize) -> f64 {
        self.point_value(AttributeKind::RoutingObstacle, road, point)
    }

    /// Directional code of `road`: 0 bidirectional, positive along the
    /// point order, negative against it.
    pub fn oneway(&self, road: &dyn Road) -> i32 {
        let codes = self.way_codes(road);
        self.rule_set(AttributeKind::OneWay).evaluate_int_or(&codes, 0)
    }

    /// Transition penalty from `prev` onto `next`, seconds.
    pub fn turn_cost(&self, next: &Traversal<'_>, prev: &Traversal<'_>) -> f64 {
        let penalties = TurnPenalties {
            left: self.settings.left_turn,
            right: self.settings.right_turn,
            roundabout: self.settings.roundabout_turn,
        };
        turn_cost(penalties, next, prev)
    }

    /// Derives a parameter-bound profile for one route request.
    ///
    /// Every rule set is specialized against `assignment` (unset
    /// parameters default to false); rules, codes and constants are
    /// shared with this profile, which is left untouched. Cheap enough
    /// to run per request.
    pub fn specialize(&self, assignment: &HashMap<String, bool>) -> RouterProfile {
        RouterProfile {
            kind: self.kind,
            attributes: self.attributes.clone(),
            parameters: self.parameters.clone(),
            rule_sets: AttributeKind::ALL
                .map(|kind| self.rule_sets[kind.index()].specialize(assignment)),
            codes: Arc::clone(&self.codes),
            settings: self.settings,
        }
    }

    fn way_codes(&self, road: &dyn Road) -> CodeList {
        self.codes.translate(road.region(), road.type_codes())
    }

    fn point_value(&self, kind: AttributeKind, road: &dyn Road, point: usize) -> f64 {
        match road.point_type_codes(point) {
            Some(local) => {
                let codes = self.codes.translate(road.region(), local);
                self.rule_set(kind).evaluate_or(&codes, 0.0)
            }
            None => 0.0,
        }
    }
}
