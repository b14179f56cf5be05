//! Error types for rule construction.

use thiserror::Error;

/// Construction-time rule errors.
///
/// Evaluation never fails: an unmatched candidate resolves to the
/// caller-supplied default.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    /// Rule output value that is not a numeric constant. A rule with an
    /// undefined output must not be registered.
    #[error("invalid rule output value '{0}'")]
    InvalidOutputValue(String),

    /// A condition clause was registered before any rule.
    #[error("condition registered outside any rule")]
    ConditionOutsideRule,
}

/// Result type alias for rule construction.
pub type Result<T> = std::result::Result<T, RuleError>;
