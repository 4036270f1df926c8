//! Shared types for the recipe catalog
//!
//! Value types (ingredients, categories, recipes) and the error system used
//! by every crate in the workspace.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use models::{Ingredient, Recipe, RecipeCategory};
pub use serde::{Deserialize, Serialize};
