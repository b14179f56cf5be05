//! A single evaluation rule: conjunctive conditions plus a constant output.

use std::collections::HashMap;
use std::fmt::Write as _;

use edgecost_core::{InternerView, TagInterner, UniversalCode};
use smallvec::SmallVec;

/// Tri-state requirement of a code condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Presence {
    /// The candidate must carry the code.
    Required,
    /// The candidate must not carry the code.
    Forbidden,
}

/// One code condition, kept sorted by code inside a rule.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CodeCondition {
    pub(crate) code: UniversalCode,
    pub(crate) presence: Presence,
}

/// One boolean-parameter gate, resolved only through specialization.
#[derive(Debug, Clone)]
pub(crate) struct ParamGate {
    pub(crate) param: String,
    pub(crate) negated: bool,
}

impl ParamGate {
    /// Whether the gate passes under `assignment`; unset parameters
    /// default to false.
    fn passes(&self, assignment: &HashMap<String, bool>) -> bool {
        let value = assignment.get(&self.param).copied().unwrap_or(false);
        if self.negated {
            !value
        } else {
            value
        }
    }
}

/// An immutable evaluation rule.
///
/// Conditions combine by AND: every code condition must hold under the
/// merge over the candidate's sorted codes, every `only_tags` entry must
/// be carried by some candidate tag, and no candidate tag may be in
/// `only_non_tags`. Rules carrying parameter gates only match inside a
/// specialized rule set.
#[derive(Debug)]
pub struct EvalRule {
    output: f64,
    conditions: Vec<CodeCondition>,
    only_tags: Vec<String>,
    only_non_tags: Vec<String>,
    gates: Vec<ParamGate>,
}

impl EvalRule {
    pub(crate) fn new(
        output: f64,
        conditions: Vec<CodeCondition>,
        only_tags: Vec<String>,
        only_non_tags: Vec<String>,
        gates: Vec<ParamGate>,
    ) -> Self {
        debug_assert!(conditions.windows(2).all(|w| w[0].code < w[1].code));
        EvalRule {
            output,
            conditions,
            only_tags,
            only_non_tags,
            gates,
        }
    }

    /// The constant output selected when this rule matches.
    #[inline]
    pub fn output(&self) -> f64 {
        self.output
    }

    pub(crate) fn has_gates(&self) -> bool {
        !self.gates.is_empty()
    }

    /// True when every gate passes under `assignment`.
    pub(crate) fn gates_satisfied(&self, assignment: &HashMap<String, bool>) -> bool {
        self.gates.iter().all(|g| g.passes(assignment))
    }

    /// Matches `candidate` (sorted ascending) against the code and tag
    /// constraints. Gates are not consulted here.
    pub(crate) fn matches(&self, candidate: &[UniversalCode], view: &InternerView<'_>) -> bool {
        // Linear merge: both sequences are sorted, so one cursor pass
        // over the candidate covers all conditions.
        let mut t = 0;
        for cond in &self.conditions {
            while t < candidate.len() && candidate[t] < cond.code {
                t += 1;
            }
            let found = t < candidate.len() && candidate[t] == cond.code;
            match cond.presence {
                Presence::Required if !found => return false,
                Presence::Forbidden if found => return false,
                _ => {}
            }
        }
        if !self.only_tags.is_empty() || !self.only_non_tags.is_empty() {
            let mut matched: SmallVec<[bool; 8]> = SmallVec::new();
            matched.resize(self.only_tags.len(), false);
            for &code in candidate {
                let Some(tag) = view.tag_of(code) else { continue };
                if self.only_non_tags.iter().any(|t| t == tag) {
                    return false;
                }
                if let Some(i) = self.only_tags.iter().position(|t| t == tag) {
                    matched[i] = true;
                }
            }
            // Every listed tag must appear among the candidate's tags.
            if matched.iter().any(|m| !m) {
                return false;
            }
        }
        true
    }

    /// Human-readable rendering for rule-set dumps.
    pub fn describe(&self, interner: &TagInterner) -> String {
        let view = interner.view();
        let mut out = format!("select {}", self.output);
        for cond in &self.conditions {
            let keyword = match cond.presence {
                Presence::Required => "if",
                Presence::Forbidden => "ifnot",
            };
            match view.pair(cond.code) {
                Some(pair) => {
                    let _ = write!(out, " {keyword} {pair}");
                }
                None => {
                    let _ = write!(out, " {keyword} {}", cond.code);
                }
            }
        }
        for gate in &self.gates {
            let sign = if gate.negated { "-" } else { "" };
            let _ = write!(out, " param={sign}{}", gate.param);
        }
        for tag in &self.only_tags {
            let _ = write!(out, " tag={tag}");
        }
        for tag in &self.only_non_tags {
            let _ = write!(out, " notag={tag}");
        }
        out
    }
}
