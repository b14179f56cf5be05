//! Edgecost Rules - Ordered rule evaluation over universal codes
//!
//! An attribute query runs the candidate's sorted code list through an
//! ordered [`RuleSet`]; the first rule whose conjunctive conditions are
//! satisfied selects the output value. Rule sets are append-only during
//! construction and immutable afterwards; per-request parameter binding
//! happens through [`RuleSet::specialize`], which shares the underlying
//! rules and only precomputes each rule's active flag.

pub mod builder;
pub mod error;
pub mod rule;
pub mod set;


pub use builder::{RuleHandle, RuleSetBuilder};
pub use error::RuleError;
pub use rule::EvalRule;
pub use set::RuleSet;
