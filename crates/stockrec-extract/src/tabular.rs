//! Tabular (spreadsheet-row) extraction.
//!
//! Rows arrive as header-to-value maps and bypass pattern extraction
//! entirely: cells are selected by exact membership in the per-concept
//! header sets, never by free-text matching.

use tracing::trace;

use stockrec_model::{Category, ExtractedRecord, TabularRow};

use crate::patterns;

fn cell<'a>(row: &'a TabularRow, headers: &[&str]) -> Option<&'a str> {
    row.iter()
        .find(|(header, value)| {
            !value.trim().is_empty()
                && headers
                    .iter()
                    .any(|candidate| header.trim().eq_ignore_ascii_case(candidate))
        })
        .map(|(_, value)| value.trim())
}

/// Extract one record per usable row, row order preserved. Rows without a
/// code cell or a positive integer quantity are dropped silently.
pub fn extract_rows(rows: &[TabularRow]) -> Vec<ExtractedRecord> {
    let mut records = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        let Some(code) = cell(row, patterns::TABULAR_CODE_HEADERS) else {
            continue;
        };
        let quantity = cell(row, patterns::TABULAR_QUANTITY_HEADERS)
            .and_then(|value| value.parse::<i64>().ok());
        let Some(quantity) = quantity.filter(|quantity| *quantity > 0) else {
            trace!(row = index, code, "row without positive quantity, dropped");
            continue;
        };
        let name = cell(row, patterns::TABULAR_NAME_HEADERS).unwrap_or_default();
        let size = cell(row, patterns::TABULAR_SIZE_HEADERS).map(str::to_string);
        let category = cell(row, patterns::TABULAR_CATEGORY_HEADERS).and_then(Category::parse);
        records.push(ExtractedRecord {
            raw_code: code.to_string(),
            quantity: quantity.min(i64::from(u32::MAX)) as u32,
            size,
            category,
            name: name.to_string(),
            source_line: format!("{name} {code} {quantity}").trim().to_string(),
            page: index,
        });
    }
    records
}
