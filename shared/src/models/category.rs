//! Recipe Category Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prompt shown when no category is selected yet
pub const CATEGORY_PROMPT: &str = "Izaberi kategoriju";

/// Closed set of recipe categories.
///
/// The persisted representation is always the integer code. Decoding an
/// unknown code through serde or [`RecipeCategory::from_code`] yields
/// [`RecipeCategory::FALLBACK`] instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i64", from = "i64")]
#[repr(u8)]
pub enum RecipeCategory {
    ColdSideDish = 0,
    WarmSideDish = 1,
    MainDish = 2,
    Snack = 3,
    Drink = 4,
    Soup = 5,
    Dessert = 6,
    Salad = 7,
    Bread = 8,
}

impl RecipeCategory {
    /// All categories in code order (picker order)
    pub const ALL: [RecipeCategory; 9] = [
        Self::ColdSideDish,
        Self::WarmSideDish,
        Self::MainDish,
        Self::Snack,
        Self::Drink,
        Self::Soup,
        Self::Dessert,
        Self::Salad,
        Self::Bread,
    ];

    /// Category used for absent or out-of-range codes
    pub const FALLBACK: RecipeCategory = Self::Snack;

    #[inline]
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Decode a persisted code, falling back to `Snack` when out of range
    pub fn from_code(code: i64) -> Self {
        Self::from_code_strict(code).unwrap_or(Self::FALLBACK)
    }

    /// Decode a persisted code, failing when it names no category
    pub fn from_code_strict(code: i64) -> Result<Self, InvalidCategoryCode> {
        match code {
            0 => Ok(Self::ColdSideDish),
            1 => Ok(Self::WarmSideDish),
            2 => Ok(Self::MainDish),
            3 => Ok(Self::Snack),
            4 => Ok(Self::Drink),
            5 => Ok(Self::Soup),
            6 => Ok(Self::Dessert),
            7 => Ok(Self::Salad),
            8 => Ok(Self::Bread),
            _ => Err(InvalidCategoryCode(code)),
        }
    }

    /// Localized display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ColdSideDish => "Hladno predjelo",
            Self::WarmSideDish => "Toplo predjelo",
            Self::MainDish => "Glavno jelo",
            Self::Snack => "Uzina",
            Self::Drink => "Pice",
            Self::Soup => "Supe i corbe",
            Self::Dessert => "Dezert",
            Self::Salad => "Salata",
            Self::Bread => "Hleba",
        }
    }
}

/// Display name for an optional category, with a prompt for the unset case
pub fn category_display_name(category: Option<RecipeCategory>) -> &'static str {
    match category {
        Some(category) => category.display_name(),
        None => CATEGORY_PROMPT,
    }
}

/// Error when a code does not name a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCategoryCode(pub i64);

impl fmt::Display for InvalidCategoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid category code: {}", self.0)
    }
}

impl std::error::Error for InvalidCategoryCode {}

impl From<i64> for RecipeCategory {
    fn from(code: i64) -> Self {
        Self::from_code(code)
    }
}

impl From<RecipeCategory> for i64 {
    fn from(category: RecipeCategory) -> Self {
        i64::from(category.code())
    }
}

impl fmt::Display for RecipeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        for (index, category) in RecipeCategory::ALL.iter().enumerate() {
            assert_eq!(category.code() as usize, index);
        }
        assert_eq!(RecipeCategory::Snack.code(), 3);
        assert_eq!(RecipeCategory::Bread.code(), 8);
    }

    #[test]
    fn test_unknown_code_falls_back_to_snack() {
        assert_eq!(RecipeCategory::from_code(42), RecipeCategory::Snack);
        assert_eq!(RecipeCategory::from_code(-1), RecipeCategory::Snack);
        assert_eq!(RecipeCategory::from_code(7), RecipeCategory::Salad);
        assert_eq!(
            RecipeCategory::from_code_strict(9),
            Err(InvalidCategoryCode(9))
        );
        assert_eq!(RecipeCategory::from_code_strict(5), Ok(RecipeCategory::Soup));
        assert_eq!(RecipeCategory::from(42_i64), RecipeCategory::Snack);
    }

    #[test]
    fn test_serde_uses_integer_code() {
        let json = serde_json::to_string(&RecipeCategory::MainDish).unwrap();
        assert_eq!(json, "2");

        let category: RecipeCategory = serde_json::from_str("5").unwrap();
        assert_eq!(category, RecipeCategory::Soup);

        let category: RecipeCategory = serde_json::from_str("42").unwrap();
        assert_eq!(category, RecipeCategory::Snack);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(category_display_name(None), "Izaberi kategoriju");
        assert_eq!(
            category_display_name(Some(RecipeCategory::ColdSideDish)),
            "Hladno predjelo"
        );
        assert_eq!(RecipeCategory::Soup.to_string(), "Supe i corbe");

        // every category has its own name, distinct from the prompt
        let mut names: Vec<&str> = RecipeCategory::ALL
            .iter()
            .map(|c| c.display_name())
            .collect();
        names.push(CATEGORY_PROMPT);
        names.sort();
        names.dedup();
        assert_eq!(names.len(), RecipeCategory::ALL.len() + 1);
    }
}
