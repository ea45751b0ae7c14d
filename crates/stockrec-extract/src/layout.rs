//! Layout-aware extraction from positioned text fragments.
//!
//! Fragments are grouped into lines by vertical proximity, the header line
//! is located through per-concept synonym patterns, and column ranges are
//! derived from the header fragments' horizontal positions. Data lines are
//! then sliced into name/code/quantity cells until a terminator keyword or a
//! blank line ends the page's data region.

use tracing::debug;

use stockrec_model::{Page, RawLine};

use crate::candidate::{CandidateLine, LineCells};
use crate::config::ExtractConfig;
use crate::patterns;

/// One reconstructed line: averaged y plus x-sorted fragments.
#[derive(Debug, Clone)]
struct GroupedLine {
    y: f64,
    fragments: Vec<(f64, String)>,
}

impl GroupedLine {
    fn text(&self) -> String {
        self.fragments
            .iter()
            .map(|(_, text)| text.as_str())
            .collect()
    }
}

/// Half-open x ranges for the three recognized columns.
#[derive(Debug, Clone)]
struct ColumnRanges {
    name: (f64, f64),
    code: Option<(f64, f64)>,
    quantity: (f64, f64),
}

/// Group a page's fragments into top-to-bottom lines.
fn group_page_lines(page: &Page, config: &ExtractConfig) -> Vec<GroupedLine> {
    let mut fragments: Vec<_> = page.fragments.iter().collect();
    // PDF y grows upward, so descending y is reading order
    fragments.sort_by(|a, b| b.y.total_cmp(&a.y));

    let mut lines: Vec<GroupedLine> = Vec::new();
    for fragment in fragments {
        match lines
            .iter_mut()
            .find(|line| (line.y - fragment.y).abs() <= config.y_tolerance)
        {
            Some(line) => {
                line.fragments.push((fragment.x, fragment.text.clone()));
                line.y = (line.y + fragment.y) / 2.0;
            }
            None => lines.push(GroupedLine {
                y: fragment.y,
                fragments: vec![(fragment.x, fragment.text.clone())],
            }),
        }
    }
    for line in &mut lines {
        line.fragments.sort_by(|a, b| a.0.total_cmp(&b.0));
    }
    lines
}

/// Derive column ranges from the header line's fragment positions.
///
/// Each column spans from its header's x minus the margin up to the next
/// header's x minus the same margin; the quantity column is widened past its
/// header so long numbers are not cut off. Returns `None` when the line does
/// not carry both a name and a quantity header.
fn header_ranges(line: &GroupedLine, config: &ExtractConfig) -> Option<ColumnRanges> {
    let margin = config.column_margin;
    let find_x = |pattern: &regex::Regex| {
        line.fragments
            .iter()
            .find(|(_, text)| pattern.is_match(text))
            .map(|(x, _)| *x)
    };
    let name_x = find_x(&patterns::NAME_HEADER)?;
    let quantity_x = find_x(&patterns::QUANTITY_HEADER)?;
    let code_x = find_x(&patterns::CODE_HEADER);
    Some(ColumnRanges {
        name: (name_x - margin, code_x.unwrap_or(quantity_x) - margin),
        code: code_x.map(|x| (x - margin, quantity_x - margin)),
        quantity: (quantity_x - margin, quantity_x + config.quantity_column_slack),
    })
}

fn pick_cell(line: &GroupedLine, range: (f64, f64)) -> String {
    line.fragments
        .iter()
        .filter(|(x, _)| *x >= range.0 && *x < range.1)
        .map(|(_, text)| text.as_str())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Extract column-bound candidate lines from positioned pages, page order
/// preserved. Pages where no header line is found contribute nothing; the
/// caller falls back to flat-text scanning when every page comes up empty.
pub fn extract_layout(pages: &[Page], config: &ExtractConfig) -> Vec<CandidateLine> {
    let mut candidates = Vec::new();
    for (page_index, page) in pages.iter().enumerate() {
        let lines = group_page_lines(page, config);
        let Some((header_index, ranges)) = lines
            .iter()
            .enumerate()
            .find_map(|(index, line)| header_ranges(line, config).map(|ranges| (index, ranges)))
        else {
            debug!(page = page_index, "no header line found, skipping page");
            continue;
        };
        debug!(
            page = page_index,
            header_line = header_index,
            has_code_column = ranges.code.is_some(),
            "header located"
        );
        for line in &lines[header_index + 1..] {
            let text = line.text().trim().to_string();
            if text.is_empty() || patterns::TERMINATOR.is_match(&text) {
                break;
            }
            let cells = LineCells {
                name: pick_cell(line, ranges.name),
                code: ranges.code.map(|range| pick_cell(line, range)),
                quantity: pick_cell(line, ranges.quantity),
            };
            candidates.push(CandidateLine {
                line: RawLine::new(text, page_index, Some(line.y)),
                cells: Some(cells),
            });
        }
    }
    candidates
}

/// Reconstruct plain ordered lines from positioned pages, for the flat-text
/// fallback when layout extraction yields nothing.
pub fn flatten_lines(pages: &[Page], config: &ExtractConfig) -> Vec<RawLine> {
    let mut raw_lines = Vec::new();
    for (page_index, page) in pages.iter().enumerate() {
        for line in group_page_lines(page, config) {
            let text = line.text().trim().to_string();
            if !text.is_empty() {
                raw_lines.push(RawLine::new(text, page_index, Some(line.y)));
            }
        }
    }
    raw_lines
}
