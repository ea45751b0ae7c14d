//! Document loading, keyed by file extension.
//!
//! `.json` files carry pre-extracted positioned fragments (an array of pages,
//! each an array of `{text, x, y}` objects), `.csv` files are read as
//! header-keyed rows, and anything else is treated as flat text.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use stockrec_model::{Document, Page, TabularRow};

/// Load one document, picking its shape from the file extension.
pub fn load_document(path: &Path) -> Result<Document> {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(str::to_ascii_lowercase);
    let document = match extension.as_deref() {
        Some("json") => load_positioned(path)?,
        Some("csv") => load_tabular(path)?,
        _ => Document::Flat(
            fs::read_to_string(path)
                .with_context(|| format!("read {}", path.display()))?,
        ),
    };
    debug!(path = %path.display(), shape = document_shape(&document), "document loaded");
    Ok(document)
}

fn load_positioned(path: &Path) -> Result<Document> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let pages: Vec<Page> =
        serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(Document::Positioned(pages))
}

fn load_tabular(path: &Path) -> Result<Document> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("open {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("read headers of {}", path.display()))?
        .clone();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read row of {}", path.display()))?;
        let row: TabularRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, cell)| (header.to_string(), cell.to_string()))
            .collect();
        rows.push(row);
    }
    Ok(Document::Tabular(rows))
}

fn document_shape(document: &Document) -> &'static str {
    match document {
        Document::Positioned(_) => "positioned",
        Document::Flat(_) => "flat",
        Document::Tabular(_) => "tabular",
    }
}
