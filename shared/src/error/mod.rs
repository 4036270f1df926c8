//! Unified error system for the recipe catalog
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for errors and diagnostics
//! - [`ErrorCategory`]: Classification of codes by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 1xxx: Source / storage errors
//! - 2xxx: Record decoding diagnostics (recoverable, never propagated)
//! - 3xxx: Catalog and editing errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::SourceUnavailable);
//! assert!(!err.code.is_recoverable());
//!
//! let err = AppError::recipe_not_found("42").with_detail("op", "remove");
//! assert_eq!(err.code, ErrorCode::RecipeNotFound);
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
