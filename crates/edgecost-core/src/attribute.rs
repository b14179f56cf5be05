//! Recognized road attribute categories.

use std::fmt;

/// The six cost categories a profile answers queries for.
///
/// Each kind owns one ordered rule set inside a profile. The names match
/// the identifiers used by configuration descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AttributeKind {
    /// Road speed in km/h.
    Speed,
    /// Multiplicative speed priority.
    Priority,
    /// Access permission; negative forbids.
    Access,
    /// Time penalty of a point obstacle, in seconds.
    ObstacleTime,
    /// Routing penalty of a point obstacle.
    RoutingObstacle,
    /// Directional restriction code.
    OneWay,
}

impl AttributeKind {
    /// Number of attribute kinds.
    pub const COUNT: usize = 6;

    /// All kinds, in rule-set storage order.
    pub const ALL: [AttributeKind; AttributeKind::COUNT] = [
        AttributeKind::Speed,
        AttributeKind::Priority,
        AttributeKind::Access,
        AttributeKind::ObstacleTime,
        AttributeKind::RoutingObstacle,
        AttributeKind::OneWay,
    ];

    /// Storage index of this kind.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The configuration-description name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            AttributeKind::Speed => "speed",
            AttributeKind::Priority => "priority",
            AttributeKind::Access => "access",
            AttributeKind::ObstacleTime => "obstacle_time",
            AttributeKind::RoutingObstacle => "obstacle",
            AttributeKind::OneWay => "oneway",
        }
    }

    /// Looks a kind up by its configuration-description name.
    pub fn from_name(name: &str) -> Option<Self> {
        AttributeKind::ALL.into_iter().find(|k| k.name() == name)
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
