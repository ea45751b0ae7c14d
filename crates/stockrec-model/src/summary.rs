//! Per-request reconciliation summary.

use serde::{Deserialize, Serialize};

use crate::record::{Category, ExtractedRecord};

/// The report returned for every reconciliation request.
///
/// Built incrementally while documents are processed and returned exactly
/// once per request. Per-line and per-file failures land in `not_found` and
/// `errors` instead of aborting the run, so operators can correct unmatched
/// lines by hand afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReconciliationSummary {
    /// Documents handed to the engine.
    pub files_processed: usize,
    /// Extracted records across all documents, before aggregation.
    pub records_processed: usize,
    /// Aggregated records resolved to a catalog entry.
    pub matched: usize,
    /// Catalog entries actually rewritten.
    pub updated: usize,
    /// Codes (optionally descriptor-annotated) with no catalog match.
    pub not_found: Vec<String>,
    /// Every record the extractor produced, for operator audit.
    pub parsed: Vec<ExtractedRecord>,
    /// Non-fatal error strings accumulated across files.
    pub errors: Vec<String>,
}

impl ReconciliationSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an unmatched code. Descriptor-annotated entries stay distinct
    /// from bare-code entries for the same code; nothing is merged.
    pub fn push_not_found(
        &mut self,
        code: &str,
        size: Option<&str>,
        category: Option<Category>,
    ) {
        self.not_found
            .push(format_not_found(code, size, category));
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Render a not-found entry, attaching whichever descriptors were supplied.
pub fn format_not_found(code: &str, size: Option<&str>, category: Option<Category>) -> String {
    match (category, size) {
        (Some(category), Some(size)) => format!("{code} (category: {category}, size: {size})"),
        (Some(category), None) => format!("{code} (category: {category})"),
        (None, Some(size)) => format!("{code} (size: {size})"),
        (None, None) => code.to_string(),
    }
}
