//! Flat-text fallback: trimmed non-empty lines, scanned independently.

use stockrec_model::RawLine;

use crate::candidate::CandidateLine;

/// Split flat document text into candidate lines (all on page 0, since flat
/// text carries no page boundaries).
pub fn flat_candidates(text: &str) -> Vec<CandidateLine> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| CandidateLine::flat(RawLine::new(line, 0, None)))
        .collect()
}

/// Wrap already-reconstructed raw lines for flat scanning.
pub fn lines_to_candidates(lines: Vec<RawLine>) -> Vec<CandidateLine> {
    lines.into_iter().map(CandidateLine::flat).collect()
}
