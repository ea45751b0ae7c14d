//! Document text extraction and line-record parsing.
//!
//! Turns positioned, flat, or tabular input into [`ExtractedRecord`]s:
//! layout-aware extraction first, flat-text scanning when layout yields
//! nothing, and a separate exact-header path for spreadsheet rows.

pub mod candidate;
pub mod config;
pub mod flat;
pub mod layout;
pub mod parser;
pub mod patterns;
pub mod tabular;

use tracing::debug;

use stockrec_model::{Document, ExtractedRecord};

pub use candidate::{CandidateLine, LineCells};
pub use config::ExtractConfig;

/// Extract every candidate record from one document.
///
/// Strategies are tried in order and none of them fails the run: a document
/// no strategy can read simply yields zero records.
pub fn extract_document(document: &Document, config: &ExtractConfig) -> Vec<ExtractedRecord> {
    match document {
        Document::Positioned(pages) => {
            let candidates = layout::extract_layout(pages, config);
            let records = parser::parse_candidates(&candidates, config);
            if !records.is_empty() {
                return records;
            }
            debug!("layout extraction yielded no records, falling back to flat scan");
            let lines = layout::flatten_lines(pages, config);
            parser::parse_candidates(&flat::lines_to_candidates(lines), config)
        }
        Document::Flat(text) => parser::parse_candidates(&flat::flat_candidates(text), config),
        Document::Tabular(rows) => tabular::extract_rows(rows),
    }
}
