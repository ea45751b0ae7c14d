//! Extracted line records and their aggregation key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category descriptor attached to a line record.
///
/// Shipment documents label these bilingually; values canonicalize to the
/// English form and keep the Chinese retail terms as matching aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Top,
    Bottom,
    Set,
}

impl Category {
    /// Canonical display form.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Top => "Top",
            Category::Bottom => "Bottom",
            Category::Set => "Set",
        }
    }

    /// Spellings recognized in documents and catalog labels.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Category::Top => &["Top", "上衣"],
            Category::Bottom => &["Bottom", "褲子"],
            Category::Set => &["Set", "套裝"],
        }
    }

    /// Parse a free-text token into a category, tolerant of surrounding text.
    pub fn parse(text: &str) -> Option<Self> {
        let lower = text.to_lowercase();
        for category in [Category::Top, Category::Bottom, Category::Set] {
            if category
                .aliases()
                .iter()
                .any(|alias| lower.contains(&alias.to_lowercase()))
            {
                return Some(category);
            }
        }
        None
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One candidate stock movement extracted from a document line or row.
///
/// Never constructed for invalid candidates: a missing code or a quantity of
/// zero or less means no record at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedRecord {
    /// Product code exactly as it appeared in the document.
    pub raw_code: String,
    /// Positive quantity for this mention.
    pub quantity: u32,
    /// Size descriptor, if the line (or its forward window) carried one.
    pub size: Option<String>,
    /// Category descriptor, if recognized.
    pub category: Option<Category>,
    /// Item-name cell text, empty when the document had no name column.
    pub name: String,
    /// The line or cell text the record was parsed from.
    pub source_line: String,
    /// Zero-based page (or row) index of the mention.
    pub page: usize,
}

/// Grouping key for merging repeated mentions of one logical line item.
///
/// `code` must already be normalized; the engine derives it once per record
/// before aggregation so that `ABC-123` and `ABC—123` land in the same group.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AggregationKey {
    pub code: String,
    pub size: Option<String>,
    pub category: Option<Category>,
}
