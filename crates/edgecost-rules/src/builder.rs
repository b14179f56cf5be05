//! Rule-set construction API.
//!
//! Driven by an external configuration-description loader. Conditions
//! accumulate against the most-recently-added rule, which mirrors a
//! nested-scope description format: the loader appends an outer scope's
//! conditions to each rule the scope encloses.

use std::sync::Arc;

use edgecost_core::{AttributeKind, TagInterner};

use crate::error::{Result, RuleError};
use crate::rule::{CodeCondition, EvalRule, ParamGate, Presence};
use crate::set::RuleSet;

/// Builds one ordered [`RuleSet`] during the configuration phase.
pub struct RuleSetBuilder {
    kind: AttributeKind,
    interner: Arc<TagInterner>,
    drafts: Vec<Draft>,
}

#[derive(Debug)]
struct Draft {
    output: f64,
    conditions: Vec<CodeCondition>,
    only_tags: Vec<String>,
    only_non_tags: Vec<String>,
    gates: Vec<ParamGate>,
}

impl Draft {
    fn new(output: f64) -> Self {
        Draft {
            output,
            conditions: Vec::new(),
            only_tags: Vec::new(),
            only_non_tags: Vec::new(),
            gates: Vec::new(),
        }
    }

    /// Sorted insert; a code already constrained keeps its first
    /// registration.
    fn insert_condition(&mut self, condition: CodeCondition) {
        match self
            .conditions
            .binary_search_by_key(&condition.code, |c| c.code)
        {
            Ok(_) => {}
            Err(pos) => self.conditions.insert(pos, condition),
        }
    }

    fn finish(self) -> EvalRule {
        EvalRule::new(
            self.output,
            self.conditions,
            self.only_tags,
            self.only_non_tags,
            self.gates,
        )
    }
}

impl RuleSetBuilder {
    /// Creates an empty builder for `kind`, interning codes through the
    /// session interner.
    pub fn new(kind: AttributeKind, interner: Arc<TagInterner>) -> Self {
        RuleSetBuilder {
            kind,
            interner,
            drafts: Vec::new(),
        }
    }

    /// The attribute kind under construction.
    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    /// Registers a new rule selecting `output`.
    ///
    /// # Errors
    ///
    /// `InvalidOutputValue` when `output` is not a numeric literal; an
    /// ill-defined rule must not be registered.
    pub fn add_rule(&mut self, output: &str) -> Result<RuleHandle<'_>> {
        let value: f64 = output
            .trim()
            .parse()
            .map_err(|_| RuleError::InvalidOutputValue(output.to_string()))?;
        self.drafts.push(Draft::new(value));
        Ok(self.handle())
    }

    /// Handle to the most-recently-added rule.
    ///
    /// # Errors
    ///
    /// `ConditionOutsideRule` when no rule has been added yet.
    pub fn last_rule(&mut self) -> Result<RuleHandle<'_>> {
        if self.drafts.is_empty() {
            return Err(RuleError::ConditionOutsideRule);
        }
        Ok(self.handle())
    }

    fn handle(&mut self) -> RuleHandle<'_> {
        let RuleSetBuilder {
            interner, drafts, ..
        } = self;
        RuleHandle {
            draft: drafts.last_mut().expect("handle without draft"),
            interner: &**interner,
        }
    }

    /// Seals the builder into an immutable rule set.
    pub fn build(self) -> RuleSet {
        let rules = self
            .drafts
            .into_iter()
            .map(|d| Arc::new(d.finish()))
            .collect();
        RuleSet::from_rules(self.kind, self.interner, rules)
    }
}

/// Mutable handle onto one rule under construction.
#[derive(Debug)]
pub struct RuleHandle<'a> {
    draft: &'a mut Draft,
    interner: &'a TagInterner,
}

impl RuleHandle<'_> {
    /// Adds a tag-value condition.
    ///
    /// With `Some(value)` the pair is interned and required present, or
    /// required absent when `negate` is set. With `None` the condition
    /// constrains bare tag presence: the tag must appear on the
    /// candidate, or must not when `negate` is set.
    pub fn tag_value(&mut self, tag: &str, value: Option<&str>, negate: bool) -> &mut Self {
        match value {
            Some(value) => {
                let code = self.interner.intern(tag, value);
                let presence = if negate {
                    Presence::Forbidden
                } else {
                    Presence::Required
                };
                self.draft.insert_condition(CodeCondition { code, presence });
            }
            None => {
                let tags = if negate {
                    &mut self.draft.only_non_tags
                } else {
                    &mut self.draft.only_tags
                };
                if !tags.iter().any(|t| t == tag) {
                    tags.push(tag.to_string());
                }
            }
        }
        self
    }

    /// Adds a boolean-parameter gate, negated when `negate` is set.
    /// Gates are resolved through specialization only.
    pub fn parameter(&mut self, param: &str, negate: bool) -> &mut Self {
        self.draft.gates.push(ParamGate {
            param: param.to_string(),
            negated: negate,
        });
        self
    }
}
