//! Ingredient Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single ingredient line: how much, of what unit, of which ingredient.
///
/// Equality is structural. Once placed into a [`Recipe`](super::Recipe)
/// an ingredient is replaced, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Amount, fractional allowed. Zero marks a blank editing row.
    pub quantity: f64,
    pub measure_unit: String,
    pub ingredient: String,
}

impl Ingredient {
    pub fn new(
        quantity: f64,
        measure_unit: impl Into<String>,
        ingredient: impl Into<String>,
    ) -> Self {
        Self {
            quantity,
            measure_unit: measure_unit.into(),
            ingredient: ingredient.into(),
        }
    }

    /// Zero-quantity row with empty unit and name
    pub fn placeholder() -> Self {
        Self::new(0.0, "", "")
    }

    /// Rows the editor drops on save: zero, negative or non-finite quantity
    pub fn is_blank(&self) -> bool {
        !(self.quantity.is_finite() && self.quantity > 0.0)
    }

    pub fn with_quantity(&self, quantity: f64) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    pub fn with_measure_unit(&self, measure_unit: impl Into<String>) -> Self {
        Self {
            measure_unit: measure_unit.into(),
            ..self.clone()
        }
    }

    pub fn with_ingredient(&self, ingredient: impl Into<String>) -> Self {
        Self {
            ingredient: ingredient.into(),
            ..self.clone()
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            format_quantity(self.quantity),
            self.measure_unit,
            self.ingredient
        )
    }
}

/// Render a quantity without a decimal point when it is a whole number.
///
/// `2.0` renders as `"2"`, `1.5` as `"1.5"`.
pub fn format_quantity(quantity: f64) -> String {
    if quantity.is_finite() && quantity.fract() == 0.0 {
        format!("{:.0}", quantity)
    } else {
        quantity.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(2.0), "2");
        assert_eq!(format_quantity(1.5), "1.5");
        assert_eq!(format_quantity(400.0), "400");
        assert_eq!(format_quantity(0.25), "0.25");
        assert_eq!(format_quantity(0.0), "0");
    }

    #[test]
    fn test_display_line() {
        let oil = Ingredient::new(2.0, "kasike", "zejtin");
        assert_eq!(oil.to_string(), "2 kasike zejtin");

        let half = Ingredient::new(1.5, "kasike", "zejtin");
        assert_eq!(half.to_string(), "1.5 kasike zejtin");
    }

    #[test]
    fn test_placeholder_is_blank() {
        assert!(Ingredient::placeholder().is_blank());
        assert!(!Ingredient::new(3.0, "komada", "jaja").is_blank());
        assert!(Ingredient::new(-1.0, "g", "so").is_blank());
        assert!(Ingredient::new(f64::NAN, "g", "so").is_blank());
    }

    #[test]
    fn test_with_helpers_replace_one_field() {
        let eggs = Ingredient::new(3.0, "komada", "jaja");
        let more = eggs.with_quantity(4.0);

        assert_eq!(more, Ingredient::new(4.0, "komada", "jaja"));
        assert_eq!(eggs.quantity, 3.0);
        assert_eq!(
            eggs.with_measure_unit("kom").with_ingredient("prepelicja jaja"),
            Ingredient::new(3.0, "kom", "prepelicja jaja")
        );
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(Ingredient::new(20.0, "grama", "sira")).unwrap();
        assert_eq!(json["measureUnit"], "grama");
        assert_eq!(json["ingredient"], "sira");
        assert_eq!(json["quantity"], 20.0);
    }
}
