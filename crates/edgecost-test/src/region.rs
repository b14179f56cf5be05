//! In-memory region table fixture.

use edgecost_core::{RegionTable, TagValue};

/// A region whose local codes index a fixed pair table.
///
/// Clones share the region id, so roads cloned from one region hit the
/// same translation cache.
#[derive(Debug, Clone)]
pub struct MockRegion {
    id: u64,
    table: Vec<TagValue>,
}

impl MockRegion {
    /// Creates an empty region with the given id.
    pub fn new(id: u64) -> Self {
        MockRegion {
            id,
            table: Vec::new(),
        }
    }

    /// Creates a region whose local code `i` decodes to `pairs[i]`.
    pub fn with_pairs(id: u64, pairs: &[(&str, &str)]) -> Self {
        MockRegion {
            id,
            table: pairs.iter().map(|(t, v)| TagValue::new(t, v)).collect(),
        }
    }

    /// Appends a pair, returning its local code.
    pub fn add(&mut self, tag: &str, value: &str) -> u32 {
        self.table.push(TagValue::new(tag, value));
        (self.table.len() - 1) as u32
    }
}

impl RegionTable for MockRegion {
    fn region_id(&self) -> u64 {
        self.id
    }

    fn decode(&self, local: u32) -> Option<TagValue> {
        self.table.get(local as usize).cloned()
    }
}
