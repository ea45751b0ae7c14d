//! File-backed catalog store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use stockrec_model::{CatalogEntry, CatalogStore, Result, StockrecError};

/// Catalog store backed by a JSON file holding an array of entries.
///
/// The whole catalog is loaded up front; every save updates the in-memory map
/// and rewrites the file, so the file always reflects the last completed
/// mutation even when a later record fails.
#[derive(Debug)]
pub struct JsonCatalogStore {
    path: PathBuf,
    entries: BTreeMap<String, CatalogEntry>,
}

impl JsonCatalogStore {
    /// Load a catalog from `path`.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let raw = fs::read_to_string(&path)?;
        let entries: Vec<CatalogEntry> = serde_json::from_str(&raw)
            .map_err(|error| StockrecError::Store(format!("{}: {error}", path.display())))?;
        debug!(path = %path.display(), entries = entries.len(), "catalog loaded");
        Ok(Self {
            path,
            entries: entries
                .into_iter()
                .map(|entry| (entry.code.clone(), entry))
                .collect(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&CatalogEntry> {
        self.entries.get(code)
    }

    fn persist(&self) -> Result<()> {
        let entries: Vec<&CatalogEntry> = self.entries.values().collect();
        let raw = serde_json::to_string_pretty(&entries)
            .map_err(|error| StockrecError::Store(error.to_string()))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl CatalogStore for JsonCatalogStore {
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
        self.persist()
    }
}
