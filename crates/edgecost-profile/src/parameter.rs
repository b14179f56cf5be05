//! Routing parameter descriptors.
//!
//! Parameters describe the user-facing toggles a front-end may offer for
//! a profile. The registry is metadata only: rule matching reads gate
//! parameter ids directly and never consults it.

use crate::error::ProfileError;

/// Value domain of a routing parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ParameterKind {
    /// On/off toggle; the only kind rule gates can reference.
    Boolean,
    /// One value out of an enumerated numeric list.
    Numeric,
    /// Freeform symbolic value.
    Symbolic,
}

impl ParameterKind {
    /// Parses a configuration-description type name, case-insensitive.
    ///
    /// # Errors
    ///
    /// An unsupported type name is fatal at construction time.
    pub fn from_name(name: &str) -> Result<Self, ProfileError> {
        match name.to_ascii_lowercase().as_str() {
            "boolean" => Ok(ParameterKind::Boolean),
            "numeric" => Ok(ParameterKind::Numeric),
            "symbolic" => Ok(ParameterKind::Symbolic),
            _ => Err(ProfileError::UnsupportedParameterType(name.to_string())),
        }
    }
}

/// User-facing routing parameter descriptor.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingParameter {
    /// Identifier rule gates and specialization assignments refer to.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display description.
    pub description: String,
    /// Value domain.
    pub kind: ParameterKind,
    /// Enumerated values for numeric parameters; empty otherwise.
    pub values: Vec<f64>,
    /// Display descriptions matching `values`; empty otherwise.
    pub value_descriptions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(
            ParameterKind::from_name("Boolean").unwrap(),
            ParameterKind::Boolean
        );
        assert_eq!(
            ParameterKind::from_name("NUMERIC").unwrap(),
            ParameterKind::Numeric
        );
    }

    #[test]
    fn test_unsupported_type_is_fatal() {
        assert_eq!(
            ParameterKind::from_name("stringly"),
            Err(ProfileError::UnsupportedParameterType("stringly".to_string()))
        );
    }
}
