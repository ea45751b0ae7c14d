//! Reconciliation engine: documents in, clamped inventory deltas and one
//! summary out.
//!
//! Processing is strictly sequential: documents one at a time, pages in
//! order, and every aggregated record is matched and mutated before the next
//! is considered. That sequencing is what makes aggregation-by-key and
//! first-match-wins deterministic. The catalog store is the only shared
//! mutable resource and is read then written once per resolved record; there
//! is no cross-request coordination.

use tracing::{debug, info, warn};

use stockrec_extract::{ExtractConfig, extract_document};
use stockrec_match::{MatchOutcome, resolve};
use stockrec_model::{
    CatalogStore, Document, ExtractedRecord, LocationId, ReconciliationSummary, Result,
    StockrecError,
};

use crate::aggregate::aggregate;
use crate::mutate::{Direction, apply_delta, apply_transfer};

/// What a reconciliation request does with each resolved record.
#[derive(Debug, Clone)]
pub enum Operation {
    /// Stock arriving at a location.
    Incoming { location: LocationId },
    /// Stock leaving a location.
    Outgoing { location: LocationId },
    /// Stock moving from one location to another.
    Transfer { from: LocationId, to: LocationId },
}

/// One reconciliation request: an operation plus the documents backing it.
#[derive(Debug, Clone)]
pub struct ReconcileRequest {
    pub operation: Operation,
    pub documents: Vec<Document>,
}

/// The document-to-inventory reconciliation engine.
#[derive(Debug, Clone, Default)]
pub struct ReconcileEngine {
    config: ExtractConfig,
}

impl ReconcileEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Process a whole request and return its summary.
    ///
    /// Only up-front validation (no documents, missing or degenerate
    /// locations) rejects the request. Everything after that point is
    /// accumulated into the summary: unmatched codes into `not_found`,
    /// store failures into `errors`, with remaining records and files
    /// always processed.
    pub fn run(
        &self,
        store: &mut dyn CatalogStore,
        request: &ReconcileRequest,
    ) -> Result<ReconciliationSummary> {
        validate(request)?;
        let mut summary = ReconciliationSummary::new();
        for (file_index, document) in request.documents.iter().enumerate() {
            summary.files_processed += 1;
            let records = extract_document(document, &self.config);
            info!(
                file = file_index,
                records = records.len(),
                "extracted candidate records"
            );
            summary.records_processed += records.len();
            summary.parsed.extend(records.iter().cloned());
            for record in aggregate(records) {
                if let Err(error) =
                    self.process_record(store, &request.operation, &record, &mut summary)
                {
                    warn!(code = %record.raw_code, %error, "record failed, continuing");
                    summary.push_error(format!(
                        "file {file_index}: {code}: {error}",
                        code = record.raw_code
                    ));
                }
            }
        }
        Ok(summary)
    }

    /// Match one aggregated record and apply its delta. A store failure is
    /// the only error path; unmatched codes are summary entries, not errors.
    fn process_record(
        &self,
        store: &mut dyn CatalogStore,
        operation: &Operation,
        record: &ExtractedRecord,
        summary: &mut ReconciliationSummary,
    ) -> Result<()> {
        let outcome = resolve(
            store,
            &record.raw_code,
            record.size.as_deref(),
            record.category,
        )?;
        let mut entry = match outcome {
            MatchOutcome::Matched(entry) => entry,
            MatchOutcome::NotFound {
                code,
                size,
                category,
            } => {
                summary.push_not_found(&code, size.as_deref(), category);
                return Ok(());
            }
        };
        summary.matched += 1;
        debug!(code = %entry.code, quantity = record.quantity, "applying delta");
        match operation {
            Operation::Incoming { location } => {
                apply_delta(&mut entry, location, Direction::Increase, record.quantity);
            }
            Operation::Outgoing { location } => {
                apply_delta(&mut entry, location, Direction::Decrease, record.quantity);
            }
            Operation::Transfer { from, to } => {
                apply_transfer(&mut entry, from, to, record.quantity);
            }
        }
        store.save(&entry)?;
        summary.updated += 1;
        Ok(())
    }
}

fn validate(request: &ReconcileRequest) -> Result<()> {
    if request.documents.is_empty() {
        return Err(StockrecError::InvalidRequest(
            "no documents supplied".to_string(),
        ));
    }
    let missing = |location: &LocationId| location.as_str().trim().is_empty();
    match &request.operation {
        Operation::Incoming { location } | Operation::Outgoing { location } => {
            if missing(location) {
                return Err(StockrecError::InvalidRequest(
                    "missing target location".to_string(),
                ));
            }
        }
        Operation::Transfer { from, to } => {
            if missing(from) || missing(to) {
                return Err(StockrecError::InvalidRequest(
                    "missing source or destination location".to_string(),
                ));
            }
            if from == to {
                return Err(StockrecError::InvalidRequest(
                    "source and destination locations are identical".to_string(),
                ));
            }
        }
    }
    Ok(())
}
