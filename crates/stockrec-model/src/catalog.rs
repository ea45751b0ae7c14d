//! Catalog entry shape shared with the persistence layer.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier for a stock location.
///
/// Resolved by an external location directory; the engine only compares and
/// maps on it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub String);

impl LocationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A sellable product variant with independent per-location stock counts.
///
/// Owned by the catalog store. The engine reads entries, rewrites their
/// quantities, and saves them back whole; it never creates or deletes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Hand-typed product code, the primary lookup key.
    pub code: String,
    /// Free-text labels, each up to two `|`-delimited sub-tokens in either
    /// order, optionally brace-wrapped (e.g. `"Top | 10"` or `"{10 | 上衣}"`).
    #[serde(default)]
    pub variant_labels: Vec<String>,
    /// Stock count per location; never negative.
    #[serde(default)]
    pub per_location_quantities: BTreeMap<LocationId, u32>,
    /// When set, descriptor matching against this entry demands both a
    /// category and a size. Code families whose entries differ only by the
    /// two-token label opt in through this flag instead of a hardcoded
    /// prefix check.
    #[serde(default)]
    pub requires_full_disambiguation: bool,
}

impl CatalogEntry {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            variant_labels: Vec::new(),
            per_location_quantities: BTreeMap::new(),
            requires_full_disambiguation: false,
        }
    }

    /// Current quantity at a location, zero when no record exists.
    pub fn quantity_at(&self, location: &LocationId) -> u32 {
        self.per_location_quantities
            .get(location)
            .copied()
            .unwrap_or(0)
    }
}
