//! Shared test fixtures for edgecost crates.
//!
//! - [`region`] - In-memory region table with explicit local codes
//! - [`road`] - Configurable road segment fixture
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! edgecost-test = { workspace = true }
//! ```

pub mod region;
pub mod road;

pub use region::MockRegion;
pub use road::MockRoad;

use std::sync::Arc;

use edgecost_core::{RegionTranslator, TagInterner};

/// A fresh translator with its own interner, standing in for one
/// configuration-load session.
pub fn translator() -> Arc<RegionTranslator> {
    Arc::new(RegionTranslator::new(Arc::new(TagInterner::new())))
}
