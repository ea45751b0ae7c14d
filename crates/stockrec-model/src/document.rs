//! Input document shapes accepted by the reconciliation engine.
//!
//! The engine never decodes file formats itself: callers hand it text that
//! has already been pulled out of a PDF or spreadsheet, in one of three
//! shapes (positioned fragments, flat text, or header-keyed rows).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single piece of positioned text from one page.
///
/// Coordinates follow the PDF convention: `y` grows upward, so larger `y`
/// means closer to the top of the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionedFragment {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// All text fragments of one page, in no particular order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    pub fragments: Vec<PositionedFragment>,
}

/// One row of a tabular (spreadsheet) document: header name to cell value.
pub type TabularRow = BTreeMap<String, String>;

/// An input document in one of the three accepted shapes.
#[derive(Debug, Clone)]
pub enum Document {
    /// Per-page positioned text fragments, e.g. from a PDF text layer.
    Positioned(Vec<Page>),
    /// Flat newline-delimited text with no position information.
    Flat(String),
    /// Spreadsheet rows keyed by header name; bypasses pattern extraction.
    Tabular(Vec<TabularRow>),
}

/// An ordered raw line reconstructed from a document.
///
/// Produced by the extractor and consumed immediately by the parser; not
/// retained anywhere past parsing.
#[derive(Debug, Clone)]
pub struct RawLine {
    pub text: String,
    pub page: usize,
    pub y: Option<f64>,
}

impl RawLine {
    pub fn new(text: impl Into<String>, page: usize, y: Option<f64>) -> Self {
        Self {
            text: text.into(),
            page,
            y,
        }
    }
}
