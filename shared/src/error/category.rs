//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// - 1xxx: Source errors
/// - 2xxx: Record diagnostics
/// - 3xxx: Catalog errors
/// - anything else (9xxx): System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Source and storage errors (1xxx)
    Source,
    /// Record decoding diagnostics (2xxx)
    Record,
    /// Catalog and editing errors (3xxx)
    Catalog,
    /// System errors (everything else)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            1000..2000 => Self::Source,
            2000..3000 => Self::Record,
            3000..4000 => Self::Catalog,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Record => "record",
            Self::Catalog => "catalog",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }

    /// Record diagnostics are absorbed locally and never fail a load
    pub fn is_recoverable(&self) -> bool {
        self.category() == ErrorCategory::Record
    }
}
