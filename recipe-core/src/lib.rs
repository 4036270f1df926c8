//! Recipe catalog core
//!
//! Record codec for the persisted recipe document, the sparse edit buffers
//! behind the recipe form, the observable in-memory catalog and the
//! file-backed store that ties them together.

pub mod catalog;
pub mod config;
pub mod edit;
pub mod logger;
pub mod records;
pub mod store;

// Re-exports
pub use catalog::{CatalogObserver, ObserverId, RecipeCatalog};
pub use config::{StoreConfig, setup_environment};
pub use edit::{RecipeDraft, SparseEditBuffer};
pub use records::{
    DocumentIssue, RecordIssue, parse, parse_document, parse_record, to_document, to_record,
};
pub use store::{BundledSource, FileSource, LoadSummary, RecipeStore, RecordSource};
