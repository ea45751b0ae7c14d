pub mod catalog;
pub mod codes;
pub mod document;
pub mod error;
pub mod record;
pub mod store;
pub mod summary;

pub use catalog::{CatalogEntry, LocationId};
pub use document::{Document, Page, PositionedFragment, RawLine, TabularRow};
pub use error::{Result, StockrecError};
pub use record::{AggregationKey, Category, ExtractedRecord};
pub use store::{CatalogStore, MemoryCatalogStore};
pub use summary::{ReconciliationSummary, format_not_found};
