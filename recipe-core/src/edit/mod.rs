//! Recipe authoring
//!
//! While a recipe is being edited its ingredients and steps live in
//! [`SparseEditBuffer`]s keyed by textual slot indices. On save,
//! [`RecipeDraft::finish`] compacts them into dense ordered lists, dropping
//! rows that were never filled.

mod buffer;
mod draft;
mod slot;

pub use buffer::{
    IngredientBuffer, IngredientField, LEGACY_BLANK_ROWS, SparseEditBuffer, StepBuffer,
};
pub use draft::RecipeDraft;
pub use slot::{SlotKey, SlotValue};
