//! Recipe Model

use super::category::RecipeCategory;
use super::ingredient::Ingredient;
use serde::{Deserialize, Serialize};

/// Scheme used for recipe deep links
pub const RECIPE_URL_SCHEME: &str = "kulinarstvoslasnoiefikasno";

/// Recipe entity
///
/// `id` is the only stable identity. `name` doubles as image key and URL
/// slug but is not unique: two recipes may share a name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Empty until the recipe has been persisted
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Preparation time in minutes
    #[serde(default)]
    pub prep_time: u32,
    /// Cooking time in minutes
    #[serde(default)]
    pub cook_time: u32,
    /// 0 = unspecified
    #[serde(default)]
    pub num_of_persons: u32,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_my_recipe: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<RecipeCategory>,
    /// Empty when unknown or anonymous
    #[serde(default, rename = "creatorID")]
    pub creator_id: String,
}

impl Recipe {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Whether this recipe has been assigned a persisted id
    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }

    /// One formatted line per ingredient: `"{quantity} {unit} {name}"`
    pub fn string_ingredients(&self) -> Vec<String> {
        self.ingredients.iter().map(|i| i.to_string()).collect()
    }

    /// Key used to look up the recipe image
    pub fn image_name(&self) -> &str {
        &self.name
    }

    /// Name with spaces stripped
    pub fn slug(&self) -> String {
        self.name.replace(' ', "")
    }

    /// Deep link built from the slug
    pub fn url(&self) -> String {
        format!("{}://{}", RECIPE_URL_SCHEME, self.slug())
    }
}
