//! Line-record parsing: candidate lines to extracted records.

use tracing::trace;

use stockrec_model::{Category, ExtractedRecord};

use crate::candidate::CandidateLine;
use crate::config::ExtractConfig;
use crate::patterns;

/// Parse every candidate line, producing zero or one record per line.
///
/// A line with no code match, or with no positive quantity nearby, is
/// dropped silently; neither condition is an error.
pub fn parse_candidates(lines: &[CandidateLine], config: &ExtractConfig) -> Vec<ExtractedRecord> {
    let mut records = Vec::new();
    for (index, candidate) in lines.iter().enumerate() {
        let code_source = candidate.code_source();
        let Some(code) = patterns::find_code(&code_source) else {
            continue;
        };
        let code = code.to_string();
        let Some(quantity) = patterns::parse_quantity(&candidate.quantity_source(&code)) else {
            trace!(code, line = %candidate.line.text, "code without usable quantity, dropped");
            continue;
        };
        let (size, category) = extract_descriptors(lines, index, config);
        records.push(ExtractedRecord {
            raw_code: code,
            quantity,
            size,
            category,
            name: candidate.name(),
            source_line: candidate.line.text.clone(),
            page: candidate.line.page,
        });
    }
    records
}

/// Scan the matching line and a bounded forward window for size and category
/// descriptors. Scanning stops at a page boundary or as soon as another
/// product code shows up, so one item's descriptors never bleed into the
/// next item's record.
fn extract_descriptors(
    lines: &[CandidateLine],
    index: usize,
    config: &ExtractConfig,
) -> (Option<String>, Option<Category>) {
    let current = &lines[index];
    let mut size = patterns::extract_size(&current.line.text);
    let mut category = patterns::extract_category(&current.line.text);

    for next in lines[index + 1..].iter().take(config.descriptor_window) {
        if size.is_some() && category.is_some() {
            break;
        }
        if next.line.page != current.line.page {
            break;
        }
        if patterns::find_code(&next.code_source()).is_some() {
            break;
        }
        if size.is_none() {
            size = patterns::extract_size(&next.line.text);
        }
        if category.is_none() {
            category = patterns::extract_category(&next.line.text);
        }
    }
    (size, category)
}
