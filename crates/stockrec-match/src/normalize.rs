//! Code normalization and tolerant spelling variants.

use stockrec_model::codes::{VARIANT_DASHES, is_dash};

/// Canonicalize a hand-typed product code: dash-like glyphs become ASCII
/// hyphens, everything outside `[A-Za-z0-9_/-]` is stripped, the rest is
/// uppercased. Idempotent by construction.
pub fn normalize(code: &str) -> String {
    code.chars()
        .map(|ch| if is_dash(ch) { '-' } else { ch })
        .filter(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '/' | '-'))
        .map(|ch| ch.to_ascii_uppercase())
        .collect()
}

/// Deterministic, order-stable spelling variants for catalog lookup.
///
/// The normalized code always comes first. Dashed codes add the
/// dash-stripped form and the alternate-dash-glyph forms; dashless codes
/// with a letter prefix add the dash-inserted form at the letters/digits
/// boundary. De-duplicated. Catalog entries are hand-typed with
/// inconsistent dash usage; looking up every variant in both directions
/// absorbs that without fuzzy string comparison.
pub fn variants(code: &str) -> Vec<String> {
    let normalized = normalize(code);
    if normalized.is_empty() {
        return Vec::new();
    }
    let mut variants = vec![normalized.clone()];
    let mut push = |candidate: String| {
        if !candidate.is_empty() && !variants.contains(&candidate) {
            variants.push(candidate);
        }
    };
    if normalized.contains('-') {
        push(normalized.replace('-', ""));
        for dash in VARIANT_DASHES {
            push(normalized.replace('-', &dash.to_string()));
        }
    } else if let Some(split) = dash_insertion_point(&normalized) {
        push(format!("{}-{}", &normalized[..split], &normalized[split..]));
    }
    variants
}

/// Where a dash would sit in a dashless code: right before the first digit,
/// provided the prefix is purely alphabetic. Bare barcodes and codes with
/// other separators get no insertion.
fn dash_insertion_point(code: &str) -> Option<usize> {
    let split = code.find(|ch: char| ch.is_ascii_digit())?;
    (split > 0 && code[..split].chars().all(|ch| ch.is_ascii_alphabetic())).then_some(split)
}
