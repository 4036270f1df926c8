//! Recoverable decoding diagnostics
//!
//! The record codec never fails. Whatever it had to default, drop or skip is
//! reported here next to the best-effort value.

use serde::Serialize;
use shared::error::ErrorCode;
use thiserror::Error;

/// One recoverable problem found while decoding or encoding a record
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordIssue {
    /// Field present with the wrong shape, default substituted
    #[error("field `{field}` has an unexpected shape, expected {expected}")]
    MalformedField {
        field: String,
        expected: &'static str,
    },

    /// Ingredient string did not split into exactly 3 parts, entry dropped
    #[error("ingredient #{index} `{raw}` splits into {parts} parts, expected 3")]
    MalformedIngredientEncoding {
        index: usize,
        raw: String,
        parts: usize,
    },

    /// Quantity text not a finite non-negative number, set to 0
    #[error("ingredient #{index} has unparseable quantity `{raw}`")]
    UnparseableQuantity { index: usize, raw: String },

    /// Category code out of range, fell back to the default category
    #[error("unknown category code {code}")]
    UnknownCategoryCode { code: i64 },

    /// Record is not a mapping, default recipe substituted
    #[error("record is not a mapping")]
    RecordNotMapping,

    /// Ingredient cannot be written in the legacy encoding, entry skipped
    #[error("ingredient #{index} cannot be encoded: {reason}")]
    UnencodableIngredient { index: usize, reason: String },
}

impl RecordIssue {
    pub fn malformed(field: impl Into<String>, expected: &'static str) -> Self {
        Self::MalformedField {
            field: field.into(),
            expected,
        }
    }

    /// Error code used when reporting this issue
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MalformedField { .. } => ErrorCode::MalformedField,
            Self::MalformedIngredientEncoding { .. } => ErrorCode::MalformedIngredientEncoding,
            Self::UnparseableQuantity { .. } => ErrorCode::UnparseableQuantity,
            Self::UnknownCategoryCode { .. } => ErrorCode::UnknownCategoryCode,
            Self::RecordNotMapping => ErrorCode::RecordNotMapping,
            Self::UnencodableIngredient { .. } => ErrorCode::UnencodableIngredient,
        }
    }
}

/// A record issue tagged with the position of its record in the document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentIssue {
    /// Index into the `recipes` array, `None` for document-level problems
    pub record: Option<usize>,
    pub issue: RecordIssue,
}

impl DocumentIssue {
    pub fn at(record: usize, issue: RecordIssue) -> Self {
        Self {
            record: Some(record),
            issue,
        }
    }

    pub fn document(issue: RecordIssue) -> Self {
        Self {
            record: None,
            issue,
        }
    }
}
