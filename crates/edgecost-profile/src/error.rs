//! Error types for profile construction.

use edgecost_rules::RuleError;
use thiserror::Error;

/// Construction-time profile errors.
///
/// Attribute queries never fail; a query without a matching rule
/// resolves to the attribute kind's typed default.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    /// A routing parameter was registered with an unknown type name.
    #[error("unsupported routing parameter type '{0}'")]
    UnsupportedParameterType(String),

    /// An enumerated value of a numeric parameter is not a numeric
    /// literal.
    #[error("invalid value '{value}' for numeric parameter '{id}'")]
    InvalidParameterValue { id: String, value: String },

    /// Rule construction failed.
    #[error(transparent)]
    Rule(#[from] RuleError),
}

/// Result type alias for profile construction.
pub type Result<T> = std::result::Result<T, ProfileError>;
