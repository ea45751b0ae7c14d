//! Catalog store capability consumed by the engine.

use std::collections::BTreeMap;

use crate::catalog::CatalogEntry;
use crate::error::Result;

/// The only persistence capability the engine needs: exact-code lookup and
/// whole-entry save.
///
/// Lookups receive pre-normalized code candidates (the normalized code plus
/// its spelling variants) and return every entry whose stored code equals any
/// candidate. Saves replace the entire entry atomically. Implementations are
/// called strictly sequentially within one reconciliation run.
pub trait CatalogStore {
    /// Entries whose code exactly equals any of the candidates, in stable
    /// store order.
    fn find(&self, candidates: &[String]) -> Result<Vec<CatalogEntry>>;

    /// Persist the whole updated entry.
    fn save(&mut self, entry: &CatalogEntry) -> Result<()>;
}

/// In-memory catalog store, keyed by entry code.
///
/// Backs tests and small fixtures; preserves insertion-independent (sorted)
/// order on lookup so matching stays deterministic.
#[derive(Debug, Default, Clone)]
pub struct MemoryCatalogStore {
    entries: BTreeMap<String, CatalogEntry>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut store = Self::new();
        for entry in entries {
            store.insert(entry);
        }
        store
    }

    pub fn insert(&mut self, entry: CatalogEntry) {
        self.entries.insert(entry.code.clone(), entry);
    }

    pub fn get(&self, code: &str) -> Option<&CatalogEntry> {
        self.entries.get(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CatalogStore for MemoryCatalogStore {
    fn find(&self, candidates: &[String]) -> Result<Vec<CatalogEntry>> {
        Ok(self
            .entries
            .values()
            .filter(|entry| candidates.iter().any(|candidate| *candidate == entry.code))
            .cloned()
            .collect())
    }

    fn save(&mut self, entry: &CatalogEntry) -> Result<()> {
        self.entries.insert(entry.code.clone(), entry.clone());
        Ok(())
    }
}
