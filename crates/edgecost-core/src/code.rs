//! Universal code and tag-value pair types.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

/// Dense integer identity for a unique (tag, value) pair.
///
/// Codes are assigned sequentially by the interner, are never reused
/// within a session, and are totally ordered so that rule matching can
/// run as a linear merge over sorted code lists.
///
/// # Example
///
/// ```
/// use edgecost_core::UniversalCode;
///
/// let a = UniversalCode::new(3);
/// let b = UniversalCode::new(7);
/// assert!(a < b);
/// assert_eq!(a.raw(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniversalCode(u32);

impl UniversalCode {
    /// Creates a code from its raw integer value.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        UniversalCode(raw)
    }

    /// Returns the raw integer value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        UniversalCode(index as u32)
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for UniversalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An interned (tag, value) pair.
///
/// Both components are `Arc<str>` so decoding a code back to its tag on
/// the matching hot path stays allocation-free.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagValue {
    /// Tag name, e.g. `highway`.
    pub tag: Arc<str>,
    /// Tag value, e.g. `motorway`.
    pub value: Arc<str>,
}

impl TagValue {
    /// Creates a new tag-value pair.
    pub fn new(tag: &str, value: &str) -> Self {
        TagValue {
            tag: Arc::from(tag),
            value: Arc::from(value),
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.tag, self.value)
    }
}

/// Sorted list of universal codes describing one candidate edge or point.
///
/// Per-edge code arrays are short, so they live inline on the stack.
pub type CodeList = SmallVec<[UniversalCode; 8]>;
