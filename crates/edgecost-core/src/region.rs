//! Per-region translation of local type codes to universal codes.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::code::{CodeList, TagValue, UniversalCode};
use crate::interner::TagInterner;

/// A map-data source's own encoding table.
///
/// Implemented by the host map-data layer. Each region numbers its type
/// codes locally; the translator resolves them through this trait once
/// and caches the result per region.
pub trait RegionTable {
    /// Stable identity of this region within the session. Caches are
    /// scoped by this id and must not be shared between sources.
    fn region_id(&self) -> u64;

    /// Decodes a region-local type code into its (tag, value) pair.
    fn decode(&self, local: u32) -> Option<TagValue>;
}

/// Translates region-local type codes into sorted universal code lists.
///
/// Caches are append-only and lazily populated on first touch; a cache
/// miss resolves the pair through the region's table, interns it, and
/// records the mapping. Population uses a double-checked insert so two
/// threads resolving the same unseen code converge on one code.
#[derive(Debug)]
pub struct RegionTranslator {
    interner: Arc<TagInterner>,
    caches: RwLock<HashMap<u64, HashMap<u32, UniversalCode>>>,
}

impl RegionTranslator {
    /// Creates a translator backed by the session's interner.
    pub fn new(interner: Arc<TagInterner>) -> Self {
        RegionTranslator {
            interner,
            caches: RwLock::new(HashMap::new()),
        }
    }

    /// The shared interner.
    pub fn interner(&self) -> &Arc<TagInterner> {
        &self.interner
    }

    /// Translates `local` codes from `region` into a sorted code list.
    ///
    /// Local codes the region cannot decode are skipped; absence is the
    /// common case during evaluation and is never an error.
    pub fn translate(&self, region: &dyn RegionTable, local: &[u32]) -> CodeList {
        let mut out = CodeList::new();
        if local.is_empty() {
            return out;
        }
        let region_id = region.region_id();
        for &local_code in local {
            if let Some(code) = self.translate_one(region_id, region, local_code) {
                out.push(code);
            }
        }
        out.sort_unstable();
        out
    }

    fn translate_one(
        &self,
        region_id: u64,
        region: &dyn RegionTable,
        local: u32,
    ) -> Option<UniversalCode> {
        if let Some(cache) = self.caches.read().unwrap().get(&region_id) {
            if let Some(&code) = cache.get(&local) {
                return Some(code);
            }
        }
        let Some(pair) = region.decode(local) else {
            debug!(region_id, local, "local type code not present in region table");
            return None;
        };
        let code = self.interner.intern(&pair.tag, &pair.value);
        self.caches
            .write()
            .unwrap()
            .entry(region_id)
            .or_default()
            .insert(local, code);
        Some(code)
    }
}
