//! Persisted record codec
//!
//! Turns loosely-typed records (generic JSON values, legacy
//! `quantity_unit_name` ingredient strings) into strict [`Recipe`] values and
//! back. Decoding is total: corrupt fields and records are repaired locally
//! and reported as [`RecordIssue`] diagnostics, so one bad record never
//! blocks the rest of the catalog.
//!
//! [`Recipe`]: shared::Recipe

mod decode;
mod encode;
mod issue;
pub mod legacy;

pub use decode::{DocumentReport, RECIPES_KEY, RecordReport, parse, parse_document, parse_record};
pub use encode::{EncodedRecord, to_document, to_record};
pub use issue::{DocumentIssue, RecordIssue};
pub use legacy::{EncodeError, LEGACY_DELIMITER, decode_ingredient, encode_ingredient};
