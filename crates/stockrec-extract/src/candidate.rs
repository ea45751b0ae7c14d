//! Candidate lines handed from the extractor to the parser.

use stockrec_model::RawLine;

/// Column-bound cell text for one data line, produced by layout extraction.
#[derive(Debug, Clone)]
pub struct LineCells {
    /// Item-name column text.
    pub name: String,
    /// Code column text; `None` when the document has no distinct code
    /// column and the code must be pulled out of the name text instead.
    pub code: Option<String>,
    /// Quantity column text.
    pub quantity: String,
}

/// One raw line plus whatever column structure the extractor recovered.
#[derive(Debug, Clone)]
pub struct CandidateLine {
    pub line: RawLine,
    pub cells: Option<LineCells>,
}

impl CandidateLine {
    /// A line with no column structure (flat-text scanning).
    pub fn flat(line: RawLine) -> Self {
        Self { line, cells: None }
    }

    /// The text the code pattern is applied to: the code cell followed by
    /// the name cell when columns exist (codes sometimes appear inside the
    /// item description), otherwise the whole line.
    pub fn code_source(&self) -> String {
        match &self.cells {
            Some(cells) => match &cells.code {
                Some(code) => format!("{code} {}", cells.name),
                None => cells.name.clone(),
            },
            None => self.line.text.clone(),
        }
    }

    /// The text the quantity pattern is applied to. Without a quantity
    /// column the whole line is scanned, minus the code itself so code
    /// digits are never mistaken for a count.
    pub fn quantity_source(&self, code: &str) -> String {
        match &self.cells {
            Some(cells) => cells.quantity.clone(),
            None => self.line.text.replacen(code, " ", 1),
        }
    }

    /// Item-name text carried into the extracted record.
    pub fn name(&self) -> String {
        self.cells
            .as_ref()
            .map(|cells| cells.name.clone())
            .unwrap_or_default()
    }
}
