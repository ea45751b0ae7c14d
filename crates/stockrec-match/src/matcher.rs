//! Catalog matching and disambiguation.

use tracing::debug;

use stockrec_model::{CatalogEntry, CatalogStore, Category, Result};

use crate::label::ParsedLabel;
use crate::normalize::{normalize, variants};

/// Outcome of resolving one extracted record against the catalog.
#[derive(Debug, Clone)]
pub enum MatchOutcome {
    /// Exactly one entry selected.
    Matched(CatalogEntry),
    /// No entry matched. Descriptors are carried when they were supplied
    /// and the failure was a label mismatch, so the two not-found shapes
    /// stay distinguishable in the summary.
    NotFound {
        code: String,
        size: Option<String>,
        category: Option<Category>,
    },
}

/// Resolve a raw code plus optional descriptors to one catalog entry.
///
/// Lookup goes through the full variant set; when descriptors are supplied
/// the candidates' variant labels are scanned and the first satisfying entry
/// wins. Without descriptors the first candidate is accepted as a permissive
/// default. Entries flagged `requires_full_disambiguation` never match on a
/// partial descriptor set.
pub fn resolve(
    store: &dyn CatalogStore,
    raw_code: &str,
    size: Option<&str>,
    category: Option<Category>,
) -> Result<MatchOutcome> {
    let normalized = normalize(raw_code);
    let candidates = variants(raw_code);
    if candidates.is_empty() {
        return Ok(MatchOutcome::NotFound {
            code: normalized,
            size: None,
            category: None,
        });
    }

    let mut entries = store.find(&candidates)?;
    if entries.is_empty() {
        debug!(code = %normalized, "no catalog entry for any variant");
        return Ok(MatchOutcome::NotFound {
            code: normalized,
            size: None,
            category: None,
        });
    }

    if size.is_none() && category.is_none() {
        // ambiguity is accepted when the caller gave nothing to disambiguate
        return Ok(MatchOutcome::Matched(entries.remove(0)));
    }

    for entry in entries {
        if entry_matches(&entry, size, category) {
            return Ok(MatchOutcome::Matched(entry));
        }
    }
    debug!(code = %normalized, ?size, ?category, "descriptors matched no variant label");
    Ok(MatchOutcome::NotFound {
        code: normalized,
        size: size.map(str::to_string),
        category,
    })
}

fn entry_matches(entry: &CatalogEntry, size: Option<&str>, category: Option<Category>) -> bool {
    if entry.requires_full_disambiguation && (size.is_none() || category.is_none()) {
        return false;
    }
    entry
        .variant_labels
        .iter()
        .any(|label| ParsedLabel::parse(label).matches(size, category))
}
