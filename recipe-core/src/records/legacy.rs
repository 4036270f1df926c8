//! Legacy `quantity_unit_name` ingredient encoding

use shared::models::{Ingredient, format_quantity};
use thiserror::Error;

/// Delimiter between quantity, unit and name
pub const LEGACY_DELIMITER: char = '_';

/// Result of decoding one legacy ingredient string
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedIngredient {
    pub ingredient: Ingredient,
    /// Set when the quantity text did not parse and `0` was used instead
    pub quantity_defaulted: bool,
}

/// Split on the delimiter, omitting empty pieces.
///
/// `"3__jaja"` therefore has two parts, not three.
pub fn split_parts(raw: &str) -> Vec<&str> {
    raw.split(LEGACY_DELIMITER)
        .filter(|part| !part.is_empty())
        .collect()
}

/// Decode `"3_komada_jaja"` into an ingredient.
///
/// Returns `None` when the string does not split into exactly 3 parts.
pub fn decode_ingredient(raw: &str) -> Option<DecodedIngredient> {
    let parts = split_parts(raw);
    let [quantity, unit, name] = parts.as_slice() else {
        return None;
    };

    let parsed = parse_quantity(quantity);
    Some(DecodedIngredient {
        ingredient: Ingredient::new(parsed.unwrap_or(0.0), *unit, *name),
        quantity_defaulted: parsed.is_none(),
    })
}

/// Finite, non-negative decimal number
fn parse_quantity(text: &str) -> Option<f64> {
    text.parse::<f64>()
        .ok()
        .filter(|q| q.is_finite() && *q >= 0.0)
}

/// Why an ingredient cannot be written in the legacy encoding
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("{0} is empty")]
    EmptyPart(&'static str),

    #[error("{0} contains the delimiter `_`")]
    ContainsDelimiter(&'static str),

    #[error("quantity {0} is negative or not finite")]
    InvalidQuantity(f64),
}

/// Encode an ingredient so that [`decode_ingredient`] reproduces it
pub fn encode_ingredient(ingredient: &Ingredient) -> Result<String, EncodeError> {
    if !ingredient.quantity.is_finite() || ingredient.quantity < 0.0 {
        return Err(EncodeError::InvalidQuantity(ingredient.quantity));
    }
    check_part("unit", &ingredient.measure_unit)?;
    check_part("name", &ingredient.ingredient)?;

    Ok(format!(
        "{}{d}{}{d}{}",
        format_quantity(ingredient.quantity),
        ingredient.measure_unit,
        ingredient.ingredient,
        d = LEGACY_DELIMITER
    ))
}

fn check_part(label: &'static str, value: &str) -> Result<(), EncodeError> {
    if value.is_empty() {
        return Err(EncodeError::EmptyPart(label));
    }
    if value.contains(LEGACY_DELIMITER) {
        return Err(EncodeError::ContainsDelimiter(label));
    }
    Ok(())
}
