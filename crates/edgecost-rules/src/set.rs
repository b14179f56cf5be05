//! Ordered rule sets with first-match evaluation.

use std::collections::HashMap;
use std::sync::Arc;

use edgecost_core::{AttributeKind, TagInterner, UniversalCode};

use crate::rule::EvalRule;

/// An ordered list of evaluation rules for one attribute kind.
///
/// Evaluation order equals registration order and the first satisfied
/// rule wins; there is no reordering by priority. A set is append-only
/// while built and immutable afterwards, so concurrent evaluation from
/// multiple path-search workers is safe.
///
/// [`RuleSet::specialize`] derives a parameter-bound copy: the rules are
/// shared by `Arc`, only the per-rule active flag is recomputed. On a
/// non-specialized set, rules carrying parameter gates are inactive.
#[derive(Debug, Clone)]
pub struct RuleSet {
    kind: AttributeKind,
    interner: Arc<TagInterner>,
    entries: Vec<RuleEntry>,
}

#[derive(Debug, Clone)]
struct RuleEntry {
    rule: Arc<EvalRule>,
    active: bool,
}

impl RuleSet {
    pub(crate) fn from_rules(
        kind: AttributeKind,
        interner: Arc<TagInterner>,
        rules: Vec<Arc<EvalRule>>,
    ) -> Self {
        let entries = rules
            .into_iter()
            .map(|rule| RuleEntry {
                active: !rule.has_gates(),
                rule,
            })
            .collect();
        RuleSet {
            kind,
            interner,
            entries,
        }
    }

    /// The attribute kind this set answers for.
    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no rule is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Evaluates `candidate` (sorted universal codes) against the rules
    /// in registration order; `None` when no rule matches.
    pub fn evaluate(&self, candidate: &[UniversalCode]) -> Option<f64> {
        let view = self.interner.view();
        for entry in &self.entries {
            if entry.active && entry.rule.matches(candidate, &view) {
                return Some(entry.rule.output());
            }
        }
        None
    }

    /// Evaluates with a caller-supplied default.
    pub fn evaluate_or(&self, candidate: &[UniversalCode], default: f64) -> f64 {
        self.evaluate(candidate).unwrap_or(default)
    }

    /// Evaluates with the output truncated to an integer code.
    pub fn evaluate_int_or(&self, candidate: &[UniversalCode], default: i32) -> i32 {
        match self.evaluate(candidate) {
            Some(value) => value as i32,
            None => default,
        }
    }

    /// Derives a parameter-bound rule set.
    ///
    /// Every gate is evaluated against `assignment` once (unset
    /// parameters default to false); a failing gate makes the derived
    /// rule permanently non-matching. Code and tag matching are
    /// unchanged, and the base set is not touched.
    pub fn specialize(&self, assignment: &HashMap<String, bool>) -> RuleSet {
        RuleSet {
            kind: self.kind,
            interner: Arc::clone(&self.interner),
            entries: self
                .entries
                .iter()
                .map(|entry| RuleEntry {
                    rule: Arc::clone(&entry.rule),
                    active: entry.rule.gates_satisfied(assignment),
                })
                .collect(),
        }
    }

    /// Renders every rule for debug dumps, one line per rule.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.rule.describe(&self.interner));
            out.push('\n');
        }
        out
    }
}
