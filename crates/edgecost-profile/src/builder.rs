//! Profile construction API, driven by the configuration loader.

use std::collections::HashMap;
use std::sync::Arc;

use edgecost_core::{AttributeKind, RegionTranslator};
use edgecost_rules::RuleSetBuilder;
use tracing::warn;

use crate::error::{ProfileError, Result};
use crate::parameter::{ParameterKind, RoutingParameter};
use crate::profile::{ProfileKind, RouterProfile, Settings, KMH_PER_MS};

/// Builds one [`RouterProfile`] during the configuration phase.
///
/// Profiles built from the same translator share one code space, so
/// rules from different profiles agree on universal codes.
pub struct ProfileBuilder {
    kind: ProfileKind,
    codes: Arc<RegionTranslator>,
    attributes: HashMap<String, String>,
    parameters: Vec<RoutingParameter>,
    rule_sets: [RuleSetBuilder; AttributeKind::COUNT],
    settings: Settings,
}

impl ProfileBuilder {
    /// Creates a builder for a profile of `kind`, interning rule codes
    /// through the session translator.
    pub fn new(kind: ProfileKind, codes: Arc<RegionTranslator>) -> Self {
        let interner = codes.interner();
        let rule_sets =
            AttributeKind::ALL.map(|k| RuleSetBuilder::new(k, Arc::clone(interner)));
        ProfileBuilder {
            kind,
            codes,
            attributes: HashMap::new(),
            parameters: Vec::new(),
            rule_sets,
            settings: Settings::default(),
        }
    }

    /// Creates a builder and applies `attributes` in one go.
    pub fn with_attributes(
        kind: ProfileKind,
        codes: Arc<RegionTranslator>,
        attributes: &HashMap<String, String>,
    ) -> Self {
        let mut builder = Self::new(kind, codes);
        for (name, value) in attributes {
            builder.set_attribute(name, value);
        }
        builder
    }

    /// Stores a freeform attribute.
    ///
    /// Recognized names additionally update the cached scalar settings:
    /// `restrictionsAware`, `leftTurn`, `rightTurn`, `roundaboutTurn`,
    /// and `minDefaultSpeed`/`maxDefaultSpeed` (given in km/h, stored in
    /// m/s). An unparsable scalar keeps the previous value.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
        match name {
            "restrictionsAware" => {
                self.settings.restrictions_aware =
                    parse_silent_bool(value, self.settings.restrictions_aware);
            }
            "leftTurn" => {
                self.settings.left_turn = parse_silent_f64(value, self.settings.left_turn);
            }
            "rightTurn" => {
                self.settings.right_turn = parse_silent_f64(value, self.settings.right_turn);
            }
            "roundaboutTurn" => {
                self.settings.roundabout_turn =
                    parse_silent_f64(value, self.settings.roundabout_turn);
            }
            "minDefaultSpeed" => {
                self.settings.min_default_speed =
                    parse_silent_f64(value, self.settings.min_default_speed * KMH_PER_MS)
                        / KMH_PER_MS;
            }
            "maxDefaultSpeed" => {
                self.settings.max_default_speed =
                    parse_silent_f64(value, self.settings.max_default_speed * KMH_PER_MS)
                        / KMH_PER_MS;
            }
            _ => {}
        }
    }

    /// A previously stored attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Registers a boolean parameter descriptor.
    pub fn register_boolean_parameter(&mut self, id: &str, name: &str, description: &str) {
        self.upsert_parameter(RoutingParameter {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            kind: ParameterKind::Boolean,
            values: Vec::new(),
            value_descriptions: Vec::new(),
        });
    }

    /// Registers a numeric parameter descriptor with its enumerated
    /// values.
    ///
    /// # Errors
    ///
    /// `InvalidParameterValue` when an enumerated value is not a numeric
    /// literal; an ill-defined parameter must not be registered.
    pub fn register_numeric_parameter(
        &mut self,
        id: &str,
        name: &str,
        description: &str,
        values: &[&str],
        value_descriptions: &[&str],
    ) -> Result<()> {
        let parsed = values
            .iter()
            .map(|v| {
                v.trim()
                    .parse::<f64>()
                    .map_err(|_| ProfileError::InvalidParameterValue {
                        id: id.to_string(),
                        value: v.to_string(),
                    })
            })
            .collect::<Result<Vec<f64>>>()?;
        self.upsert_parameter(RoutingParameter {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            kind: ParameterKind::Numeric,
            values: parsed,
            value_descriptions: value_descriptions.iter().map(|s| s.to_string()).collect(),
        });
        Ok(())
    }

    /// The rule-set builder for `kind`; conditions registered through it
    /// accumulate against its most-recently-added rule.
    pub fn rule_set(&mut self, kind: AttributeKind) -> &mut RuleSetBuilder {
        &mut self.rule_sets[kind.index()]
    }

    /// Seals the builder into an immutable profile.
    pub fn build(self) -> RouterProfile {
        RouterProfile {
            kind: self.kind,
            attributes: self.attributes,
            parameters: self.parameters,
            rule_sets: self.rule_sets.map(RuleSetBuilder::build),
            codes: self.codes,
            settings: self.settings,
        }
    }

    /// Re-registration under an existing id replaces the descriptor in
    /// place, keeping registration order.
    fn upsert_parameter(&mut self, parameter: RoutingParameter) {
        match self.parameters.iter_mut().find(|p| p.id == parameter.id) {
            Some(existing) => *existing = parameter,
            None => self.parameters.push(parameter),
        }
    }
}

fn parse_silent_f64(text: &str, previous: f64) -> f64 {
    if text.is_empty() {
        return previous;
    }
    match text.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(value = text, "unparsable scalar setting, keeping previous value");
            previous
        }
    }
}

fn parse_silent_bool(text: &str, previous: bool) -> bool {
    if text.is_empty() {
        return previous;
    }
    match text.trim().to_ascii_lowercase().as_str() {
        "true" => true,
        "false" => false,
        _ => {
            warn!(value = text, "unparsable boolean setting, keeping previous value");
            previous
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> ProfileBuilder {
        let interner = Arc::new(edgecost_core::TagInterner::new());
        ProfileBuilder::new(
            ProfileKind::Car,
            Arc::new(RegionTranslator::new(interner)),
        )
    }

    #[test]
    fn test_unrecognized_attribute_stored_verbatim() {
        let mut b = builder();
        b.set_attribute("heuristicCoefficient", "1.2");
        let profile = b.build();
        assert_eq!(profile.attribute("heuristicCoefficient"), Some("1.2"));
        assert!(profile.contains_attribute("heuristicCoefficient"));
        assert!(!profile.contains_attribute("other"));
    }

    #[test]
    fn test_speed_bounds_unit_converted_on_set() {
        let mut b = builder();
        b.set_attribute("minDefaultSpeed", "36");
        b.set_attribute("maxDefaultSpeed", "72");
        let profile = b.build();
        assert!((profile.min_default_speed() - 10.0).abs() < 1e-9);
        assert!((profile.max_default_speed() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_unparsable_scalar_keeps_previous_value() {
        let mut b = builder();
        b.set_attribute("leftTurn", "30");
        b.set_attribute("leftTurn", "half a minute");
        b.set_attribute("restrictionsAware", "maybe");
        let profile = b.build();
        // The malformed values are still stored verbatim as attributes.
        assert_eq!(profile.attribute("leftTurn"), Some("half a minute"));
        assert!(profile.restrictions_aware());
    }

    #[test]
    fn test_restrictions_aware_toggle() {
        let mut b = builder();
        assert!(b.settings.restrictions_aware);
        b.set_attribute("restrictionsAware", "false");
        let profile = b.build();
        assert!(!profile.restrictions_aware());
    }

    #[test]
    fn test_numeric_parameter_value_parse_is_fatal() {
        let mut b = builder();
        let err = b
            .register_numeric_parameter("incline", "Incline", "", &["5", "steep"], &["5%", "?"])
            .unwrap_err();
        assert_eq!(
            err,
            ProfileError::InvalidParameterValue {
                id: "incline".to_string(),
                value: "steep".to_string(),
            }
        );
    }

    #[test]
    fn test_parameter_reregistration_replaces_in_place() {
        let mut b = builder();
        b.register_boolean_parameter("toll", "Avoid tolls", "old");
        b.register_boolean_parameter("shortcuts", "Allow shortcuts", "");
        b.register_boolean_parameter("toll", "Avoid tolls", "new");
        let profile = b.build();
        let params = profile.parameters();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].id, "toll");
        assert_eq!(params[0].description, "new");
        assert_eq!(params[1].id, "shortcuts");
    }
}
