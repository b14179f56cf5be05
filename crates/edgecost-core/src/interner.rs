//! Tag-value interning.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard};

use crate::code::{TagValue, UniversalCode};

/// Assigns dense [`UniversalCode`]s to (tag, value) pairs.
///
/// Interning is idempotent: the same pair always yields the same code,
/// and N distinct pairs yield N distinct codes in first-seen order.
/// The interner is an explicitly owned service shared (via `Arc`) by all
/// profiles built within one configuration-load session.
///
/// Interior mutability is required because interning continues lazily
/// during the read phase, when region translation first touches a local
/// code. Concurrent interning of the same pair converges on one code.
///
/// # Example
///
/// ```
/// use edgecost_core::TagInterner;
///
/// let interner = TagInterner::new();
/// let a = interner.intern("highway", "motorway");
/// let b = interner.intern("highway", "trunk");
/// assert_ne!(a, b);
/// assert_eq!(a, interner.intern("highway", "motorway"));
/// ```
#[derive(Debug, Default)]
pub struct TagInterner {
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    codes: HashMap<TagValue, UniversalCode>,
    pairs: Vec<TagValue>,
}

impl TagInterner {
    /// Creates an empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the code for `(tag, value)`, assigning the next sequential
    /// code on first sight.
    pub fn intern(&self, tag: &str, value: &str) -> UniversalCode {
        let pair = TagValue::new(tag, value);
        if let Some(&code) = self.state.read().unwrap().codes.get(&pair) {
            return code;
        }
        let mut state = self.state.write().unwrap();
        // Re-check: another thread may have interned the pair between the
        // read and write lock.
        if let Some(&code) = state.codes.get(&pair) {
            return code;
        }
        let code = UniversalCode::from_index(state.pairs.len());
        state.pairs.push(pair.clone());
        state.codes.insert(pair, code);
        code
    }

    /// Decodes a code back to its pair, if assigned.
    pub fn resolve(&self, code: UniversalCode) -> Option<TagValue> {
        self.state.read().unwrap().pairs.get(code.index()).cloned()
    }

    /// Takes a read snapshot for repeated decoding without re-locking.
    pub fn view(&self) -> InternerView<'_> {
        InternerView(self.state.read().unwrap())
    }

    /// Number of assigned codes.
    pub fn len(&self) -> usize {
        self.state.read().unwrap().pairs.len()
    }

    /// True if no pair has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read guard over the interner, used on the matching hot path to decode
/// candidate codes without taking the lock per code.
pub struct InternerView<'a>(RwLockReadGuard<'a, State>);

impl InternerView<'_> {
    /// The pair assigned to `code`, if any.
    pub fn pair(&self, code: UniversalCode) -> Option<&TagValue> {
        self.0.pairs.get(code.index())
    }

    /// The tag name of `code`, if assigned.
    pub fn tag_of(&self, code: UniversalCode) -> Option<&str> {
        self.pair(code).map(|p| &*p.tag)
    }
}
