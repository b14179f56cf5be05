//! Configuration assembly for edgecost.
//!
//! An external configuration-description loader registers named profiles
//! with a [`ConfigBuilder`] once per session; every route computation
//! then calls [`ConfigBuilder::build`] to obtain a [`RoutingConfig`]
//! with the selected profile specialized for the request and the global
//! search settings resolved from freeform attributes.
//!
//! # Examples
//!
//! ```
//! use edgecost_config::ConfigBuilder;
//! use edgecost_core::{RegionTranslator, TagInterner};
//! use edgecost_profile::{ProfileBuilder, ProfileKind};
//! use std::sync::Arc;
//!
//! let translator = Arc::new(RegionTranslator::new(Arc::new(TagInterner::new())));
//! let mut builder = ConfigBuilder::new();
//! builder.set_default_profile("car");
//! builder.add_profile(
//!     "car",
//!     ProfileBuilder::new(ProfileKind::Car, translator).build(),
//! );
//!
//! let config = builder.build("car", 0, &[]);
//! assert_eq!(config.profile_name, "car");
//! assert_eq!(config.memory_limitation, 30 << 20);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use edgecost_core::{RegionTranslator, TagInterner};
use edgecost_profile::{ProfileBuilder, ProfileKind, RouterProfile};
use tracing::warn;

/// Default memory budget for a route computation, in megabytes.
pub const DEFAULT_MEMORY_LIMIT_MB: u64 = 30;

/// Resolved configuration for one route computation.
#[derive(Debug, Clone)]
pub struct RoutingConfig {
    /// The selected profile, specialized for this request.
    pub profile: Arc<RouterProfile>,
    /// Name the profile was registered under.
    pub profile_name: String,
    /// Session attributes, including the resolved profile name.
    pub attributes: HashMap<String, String>,
    /// A* heuristic coefficient.
    pub heuristic_coefficient: f64,
    /// Zoom level map tiles are loaded at.
    pub zoom_to_load_tiles: u32,
    /// Memory budget for the search, in bytes.
    pub memory_limitation: u64,
    /// Graph expansion direction: 0 both ways, 1 forward, -1 backward.
    pub plan_road_direction: i32,
    /// Direction of movement at the start point in radians, if known.
    pub initial_direction: Option<f64>,
    /// Distance after which a route is recalculated in movement, meters.
    pub recalculate_distance: f64,
}

/// Session registry of named profiles and global attributes.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    default_profile: String,
    profiles: HashMap<String, Arc<RouterProfile>>,
    attributes: HashMap<String, String>,
}

impl ConfigBuilder {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Names the profile used when a request names an unknown one.
    pub fn set_default_profile(&mut self, name: &str) {
        self.default_profile = name.to_string();
    }

    /// Registers a profile under `name`.
    pub fn add_profile(&mut self, name: &str, profile: RouterProfile) {
        self.profiles.insert(name.to_string(), Arc::new(profile));
    }

    /// Stores a session-global attribute. Profile attributes take
    /// precedence over these during `build`.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    /// Builds the configuration for one route computation.
    ///
    /// `specialization` lists the boolean parameters the request turns
    /// on; every other parameter is off. `memory_limit_mb` of 0 falls
    /// back to the `memoryLimitInMB` attribute, then the default.
    pub fn build(
        &self,
        profile: &str,
        memory_limit_mb: u64,
        specialization: &[&str],
    ) -> RoutingConfig {
        self.build_with_direction(profile, None, memory_limit_mb, specialization)
    }

    /// `build` with the initial movement direction known.
    pub fn build_with_direction(
        &self,
        profile: &str,
        initial_direction: Option<f64>,
        memory_limit_mb: u64,
        specialization: &[&str],
    ) -> RoutingConfig {
        let name = if self.profiles.contains_key(profile) {
            profile
        } else {
            self.default_profile.as_str()
        };
        let assignment: HashMap<String, bool> = specialization
            .iter()
            .map(|p| ((*p).to_string(), true))
            .collect();
        let profile = match self.profiles.get(name) {
            Some(base) => Arc::new(base.specialize(&assignment)),
            None => Arc::new(fallback_profile()),
        };

        let mut attributes = self.attributes.clone();
        attributes.insert("routerName".to_string(), name.to_string());

        let lookup = |key: &str| -> Option<&str> {
            profile
                .attribute(key)
                .or_else(|| self.attributes.get(key).map(String::as_str))
        };

        let desired_mb = parse_silent_u64(lookup("memoryLimitInMB"), 0);
        let memory_mb = if desired_mb != 0 {
            desired_mb
        } else if memory_limit_mb != 0 {
            memory_limit_mb
        } else {
            DEFAULT_MEMORY_LIMIT_MB
        };

        RoutingConfig {
            profile_name: name.to_string(),
            heuristic_coefficient: parse_silent_f64(lookup("heuristicCoefficient"), 1.0),
            zoom_to_load_tiles: parse_silent_u64(lookup("zoomToLoadTiles"), 16) as u32,
            memory_limitation: memory_mb << 20,
            plan_road_direction: parse_silent_i32(lookup("planRoadDirection"), 0),
            recalculate_distance: parse_silent_f64(lookup("recalculateDistanceHelp"), 10_000.0),
            initial_direction,
            attributes,
            profile,
        }
    }
}

/// Stand-in profile when not even the default profile is registered;
/// carries no rules, so every query answers its typed default.
fn fallback_profile() -> RouterProfile {
    let translator = Arc::new(RegionTranslator::new(Arc::new(TagInterner::new())));
    ProfileBuilder::new(ProfileKind::Car, translator).build()
}

fn parse_silent_f64(text: Option<&str>, default: f64) -> f64 {
    let Some(text) = text else { return default };
    if text.is_empty() {
        return default;
    }
    match text.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(value = text, "unparsable scalar setting, keeping default");
            default
        }
    }
}

fn parse_silent_u64(text: Option<&str>, default: u64) -> u64 {
    let Some(text) = text else { return default };
    if text.is_empty() {
        return default;
    }
    match text.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(value = text, "unparsable scalar setting, keeping default");
            default
        }
    }
}

fn parse_silent_i32(text: Option<&str>, default: i32) -> i32 {
    let Some(text) = text else { return default };
    if text.is_empty() {
        return default;
    }
    match text.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(value = text, "unparsable scalar setting, keeping default");
            default
        }
    }
}
