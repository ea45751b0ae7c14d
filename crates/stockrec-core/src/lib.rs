//! Reconciliation core: quantity aggregation, clamped inventory mutation,
//! and the engine that drives extraction, matching, and persistence.

pub mod aggregate;
pub mod engine;
pub mod mutate;

pub use aggregate::{aggregate, aggregation_key};
pub use engine::{Operation, ReconcileEngine, ReconcileRequest};
pub use mutate::{Direction, apply_delta, apply_transfer};
