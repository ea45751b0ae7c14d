use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use stockrec_cli::documents::load_document;
use stockrec_cli::store::JsonCatalogStore;
use stockrec_core::{Operation, ReconcileEngine, ReconcileRequest};
use stockrec_model::{Document, LocationId, ReconciliationSummary};

use crate::cli::{CommonArgs, IncomingArgs, OutgoingArgs, TransferArgs};

pub fn run_incoming(args: &IncomingArgs) -> Result<ReconciliationSummary> {
    let operation = Operation::Incoming {
        location: LocationId::new(args.location.clone()),
    };
    run(operation, &args.common)
}

pub fn run_outgoing(args: &OutgoingArgs) -> Result<ReconciliationSummary> {
    let operation = Operation::Outgoing {
        location: LocationId::new(args.location.clone()),
    };
    run(operation, &args.common)
}

pub fn run_transfer(args: &TransferArgs) -> Result<ReconciliationSummary> {
    let operation = Operation::Transfer {
        from: LocationId::new(args.from.clone()),
        to: LocationId::new(args.to.clone()),
    };
    run(operation, &args.common)
}

fn run(operation: Operation, common: &CommonArgs) -> Result<ReconciliationSummary> {
    let span = info_span!("reconcile", operation = operation_name(&operation));
    let _guard = span.enter();

    let mut store = JsonCatalogStore::load(&common.catalog)
        .with_context(|| format!("load catalog {}", common.catalog.display()))?;
    info!(entries = store.len(), "catalog loaded");

    let (documents, load_failures) = load_documents(&common.files);

    // Unreadable files become summary errors; the rest of the batch runs.
    let mut summary = if documents.is_empty() {
        ReconciliationSummary::new()
    } else {
        let request = ReconcileRequest {
            operation,
            documents,
        };
        ReconcileEngine::new().run(&mut store, &request)?
    };
    summary.files_processed += load_failures.len();
    for failure in load_failures {
        summary.push_error(failure);
    }

    info!(
        files = summary.files_processed,
        matched = summary.matched,
        updated = summary.updated,
        not_found = summary.not_found.len(),
        errors = summary.errors.len(),
        "reconciliation finished"
    );
    Ok(summary)
}

fn load_documents(files: &[PathBuf]) -> (Vec<Document>, Vec<String>) {
    let mut documents = Vec::new();
    let mut failures = Vec::new();
    for path in files {
        match load_document(path) {
            Ok(document) => documents.push(document),
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping unreadable document");
                failures.push(format!("{}: {error:#}", path.display()));
            }
        }
    }
    (documents, failures)
}

fn operation_name(operation: &Operation) -> &'static str {
    match operation {
        Operation::Incoming { .. } => "incoming",
        Operation::Outgoing { .. } => "outgoing",
        Operation::Transfer { .. } => "transfer",
    }
}
