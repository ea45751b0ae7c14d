//! Library components for the stock reconciliation CLI.

pub mod documents;
pub mod logging;
pub mod store;
