//! Data models
//!
//! Shared between the record codec, the edit buffers and the catalog.
//! The strict in-memory model; the loosely-typed persisted shape is handled
//! by `recipe-core::records`.

pub mod category;
pub mod ingredient;
pub mod recipe;

// Re-exports
pub use category::*;
pub use ingredient::*;
pub use recipe::*;
