//! Shared vocabulary for product-code spelling.
//!
//! Catalog codes are hand-typed; the same code shows up with an ASCII hyphen,
//! an en dash, an em dash, or no separator at all. Every crate that touches
//! codes (extraction patterns, normalization, variant generation) draws the
//! accepted dash glyphs from this one table.

/// Dash-like characters accepted anywhere an ASCII hyphen is expected.
///
/// Hyphen, hyphen (U+2010), non-breaking hyphen (U+2011), en dash, em dash,
/// minus sign.
pub const DASH_CHARS: [char; 6] = ['-', '\u{2010}', '\u{2011}', '\u{2013}', '\u{2014}', '\u{2212}'];

/// The same glyphs as a regex character-class body.
pub const DASH_CLASS: &str = "-\u{2010}\u{2011}\u{2013}\u{2014}\u{2212}";

/// Alternate dash glyphs substituted into code variants.
///
/// Only the dashes actually seen in hand-typed catalog entries; the exotic
/// hyphens are tolerated on input but never generated.
pub const VARIANT_DASHES: [char; 2] = ['\u{2014}', '\u{2013}'];

/// Returns true for any accepted dash glyph.
pub fn is_dash(ch: char) -> bool {
    DASH_CHARS.contains(&ch)
}
