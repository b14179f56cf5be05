//! Edgecost - Rule-based road costing for path search
//!
//! Edgecost compiles a declarative rule description into integer-coded
//! rule sets and answers per-edge attribute queries (speed, priority,
//! access, obstacles, oneway, turn cost) fast enough to be called once
//! per candidate edge of a path search.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use edgecost::prelude::*;
//!
//! let interner = Arc::new(TagInterner::new());
//! let translator = Arc::new(RegionTranslator::new(interner));
//!
//! let mut profile = ProfileBuilder::new(ProfileKind::Car, translator);
//! profile.set_attribute("leftTurn", "30");
//! profile
//!     .rule_set(AttributeKind::Speed)
//!     .add_rule("90")?
//!     .tag_value("highway", Some("motorway"), false);
//! let profile = profile.build();
//!
//! assert!(profile.restrictions_aware());
//! # Ok::<(), edgecost::RuleError>(())
//! ```

// Code space
pub use edgecost_core::{
    AttributeKind, CodeList, InternerView, RegionTable, RegionTranslator, TagInterner, TagValue,
    UniversalCode,
};

// Rule engine
pub use edgecost_rules::{EvalRule, RuleError, RuleHandle, RuleSet, RuleSetBuilder};

// Profile dispatcher
pub use edgecost_profile::{
    turn_cost, ParameterKind, ProfileBuilder, ProfileError, ProfileKind, Road, RouterProfile,
    RoutingParameter, Traversal, TurnPenalties,
};

// Configuration assembly
pub use edgecost_config::{ConfigBuilder, RoutingConfig, DEFAULT_MEMORY_LIMIT_MB};

pub mod prelude {
    //! Everything a configuration loader or path-search host needs.
    pub use super::{
        AttributeKind, ConfigBuilder, ParameterKind, ProfileBuilder, ProfileKind, RegionTable,
        RegionTranslator, Road, RouterProfile, RoutingConfig, RoutingParameter, RuleError,
        RuleSetBuilder, TagInterner, TagValue, Traversal, TurnPenalties, UniversalCode,
    };
}
