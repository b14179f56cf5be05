//! Edgecost Profile - Attribute dispatching for path search
//!
//! A [`RouterProfile`] owns one rule set per [`AttributeKind`] plus the
//! global scalar settings, and answers the typed attribute queries path
//! search issues per candidate edge or point:
//! - `speed` / `speed_priority` for edge traversal time
//! - `access` / `accepts` for edge admission
//! - `obstacle_time` / `routing_obstacle` for point penalties
//! - `oneway` for directional restrictions
//! - `turn_cost` for inter-segment transition penalties
//!
//! Profiles are built once per configuration-load session through
//! [`ProfileBuilder`] and specialized per route request with boolean
//! parameter assignments.

pub mod builder;
pub mod error;
pub mod parameter;
pub mod profile;
pub mod road;
pub mod turn;

pub use builder::ProfileBuilder;
pub use error::ProfileError;
pub use parameter::{ParameterKind, RoutingParameter};
pub use profile::{ProfileKind, RouterProfile};
pub use road::{Road, Traversal};
pub use turn::{turn_cost, TurnPenalties};
