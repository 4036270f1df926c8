//! Unified error codes for the recipe catalog
//!
//! Error codes are organized by category:
//! - 1xxx: Source / storage errors
//! - 2xxx: Record decoding diagnostics
//! - 3xxx: Catalog and editing errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they serialize the same
/// way in logs, diagnostics and persisted reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 1xxx: Source ====================
    /// Neither the primary nor the fallback record source could be read
    SourceUnavailable = 1001,
    /// A source was readable but did not contain a JSON document
    InvalidDocument = 1002,
    /// Writing the record document failed
    StorageWriteFailed = 1003,

    // ==================== 2xxx: Record ====================
    /// A recognized field was present with the wrong shape
    MalformedField = 2001,
    /// An ingredient string did not split into quantity, unit and name
    MalformedIngredientEncoding = 2002,
    /// An ingredient quantity could not be parsed and was set to zero
    UnparseableQuantity = 2003,
    /// A category code outside the known range
    UnknownCategoryCode = 2004,
    /// A record that is not a mapping
    RecordNotMapping = 2005,
    /// An ingredient that cannot be written in the legacy encoding
    UnencodableIngredient = 2006,

    // ==================== 3xxx: Catalog ====================
    /// Recipe not found in the catalog
    RecipeNotFound = 3001,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Configuration or environment setup error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            // Source
            ErrorCode::SourceUnavailable => "Recipe source is unavailable",
            ErrorCode::InvalidDocument => "Recipe document is not valid JSON",
            ErrorCode::StorageWriteFailed => "Failed to write recipe document",

            // Record
            ErrorCode::MalformedField => "Field has an unexpected shape",
            ErrorCode::MalformedIngredientEncoding => "Ingredient encoding is malformed",
            ErrorCode::UnparseableQuantity => "Ingredient quantity could not be parsed",
            ErrorCode::UnknownCategoryCode => "Unknown category code",
            ErrorCode::RecordNotMapping => "Record is not a mapping",
            ErrorCode::UnencodableIngredient => "Ingredient cannot be encoded",

            // Catalog
            ErrorCode::RecipeNotFound => "Recipe not found",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // Source
            1001 => Ok(ErrorCode::SourceUnavailable),
            1002 => Ok(ErrorCode::InvalidDocument),
            1003 => Ok(ErrorCode::StorageWriteFailed),

            // Record
            2001 => Ok(ErrorCode::MalformedField),
            2002 => Ok(ErrorCode::MalformedIngredientEncoding),
            2003 => Ok(ErrorCode::UnparseableQuantity),
            2004 => Ok(ErrorCode::UnknownCategoryCode),
            2005 => Ok(ErrorCode::RecordNotMapping),
            2006 => Ok(ErrorCode::UnencodableIngredient),

            // Catalog
            3001 => Ok(ErrorCode::RecipeNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
