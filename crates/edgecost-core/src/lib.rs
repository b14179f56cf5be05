//! Edgecost Core - Universal tag-value codes and region translation
//!
//! This crate provides the foundation of the edgecost rule engine:
//! - `UniversalCode` for integer-coded tag matching
//! - `TagInterner` assigning codes to (tag, value) pairs
//! - `RegionTranslator` mapping per-source local codes to universal codes
//! - `AttributeKind` naming the recognized cost categories

pub mod attribute;
pub mod code;
pub mod interner;
pub mod region;

pub use attribute::AttributeKind;
pub use code::{CodeList, TagValue, UniversalCode};
pub use interner::{InternerView, TagInterner};
pub use region::{RegionTable, RegionTranslator};
