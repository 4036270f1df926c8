//! Add / edit recipe form state

use shared::models::{Recipe, RecipeCategory};

use super::buffer::{IngredientBuffer, StepBuffer};

/// Everything the user has typed into the recipe form so far.
///
/// Numeric fields are kept as entered and parsed on [`finish`](Self::finish);
/// text that is not an integer becomes `0`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDraft {
    pub name: String,
    pub prep_time: String,
    pub cook_time: String,
    pub num_of_persons: String,
    pub category: RecipeCategory,
    pub ingredients: IngredientBuffer,
    pub steps: StepBuffer,
    /// Recipe being edited, `None` when creating
    original: Option<Recipe>,
}

impl RecipeDraft {
    /// Empty form with three blank ingredient and step rows
    pub fn new() -> Self {
        Self {
            name: String::new(),
            prep_time: String::new(),
            cook_time: String::new(),
            num_of_persons: String::new(),
            category: RecipeCategory::ColdSideDish,
            ingredients: IngredientBuffer::seed_empty(),
            steps: StepBuffer::seed_empty(),
            original: None,
        }
    }

    /// Form pre-filled from an existing recipe
    pub fn edit(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            prep_time: recipe.prep_time.to_string(),
            cook_time: recipe.cook_time.to_string(),
            num_of_persons: recipe.num_of_persons.to_string(),
            category: recipe.category.unwrap_or(RecipeCategory::ColdSideDish),
            ingredients: IngredientBuffer::seed_from_recipe(recipe),
            steps: StepBuffer::seed_from_recipe(recipe),
            original: Some(recipe.clone()),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.original.is_some()
    }

    pub fn original(&self) -> Option<&Recipe> {
        self.original.as_ref()
    }

    /// Compact the buffers into a recipe.
    ///
    /// An edited recipe keeps its id, favorite flag, ownership and creator
    /// (the current user fills in a missing creator). A new recipe is owned
    /// by the current user and has no id yet.
    pub fn finish(&self, current_user: Option<&str>) -> Recipe {
        let current_user = current_user.unwrap_or_default();
        let (id, is_favorite, is_my_recipe, creator_id) = match &self.original {
            Some(original) => (
                original.id.clone(),
                original.is_favorite,
                original.is_my_recipe,
                if original.creator_id.is_empty() {
                    current_user.to_string()
                } else {
                    original.creator_id.clone()
                },
            ),
            None => (String::new(), false, true, current_user.to_string()),
        };

        let recipe = Recipe {
            id,
            name: self.name.clone(),
            prep_time: parse_count(&self.prep_time),
            cook_time: parse_count(&self.cook_time),
            num_of_persons: parse_count(&self.num_of_persons),
            ingredients: self.ingredients.compact(),
            steps: self.steps.compact(),
            is_favorite,
            is_my_recipe,
            category: Some(self.category),
            creator_id,
        };

        tracing::debug!(
            recipe = %recipe.name,
            editing = self.is_editing(),
            ingredients = recipe.ingredients.len(),
            steps = recipe.steps.len(),
            "recipe draft finished"
        );
        recipe
    }
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_count(text: &str) -> u32 {
    text.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::IngredientField;
    use shared::models::Ingredient;

    fn rice() -> Recipe {
        Recipe {
            id: "r-3".into(),
            name: "Pirinac".into(),
            prep_time: 20,
            cook_time: 25,
            num_of_persons: 4,
            ingredients: vec![
                Ingredient::new(200.0, "grama", "pirinac"),
                Ingredient::new(400.0, "mililitra", "voda"),
            ],
            steps: vec!["Oprati pirinac".into(), "Dodati vodu".into()],
            is_favorite: true,
            is_my_recipe: true,
            category: Some(RecipeCategory::WarmSideDish),
            creator_id: "user-1".into(),
        }
    }

    #[test]
    fn test_new_draft_defaults() {
        let draft = RecipeDraft::new();
        assert!(!draft.is_editing());
        assert_eq!(draft.category, RecipeCategory::ColdSideDish);
        assert_eq!(draft.ingredients.len(), 3);
        assert_eq!(draft.steps.len(), 3);
    }

    #[test]
    fn test_new_recipe_from_form() {
        let mut draft = RecipeDraft::new();
        draft.name = "Sendvic".into();
        draft.prep_time = "5".into();
        draft.cook_time = "nista".into();
        draft.category = RecipeCategory::Bread;
        draft.ingredients.set_field("1", IngredientField::Quantity(2.0));
        draft.ingredients.set_field("1", IngredientField::Unit("parceta".into()));
        draft.ingredients.set_field("1", IngredientField::Name("hleba".into()));
        draft.steps.set_step("0", "Uzeti jedno parce hleba");

        let recipe = draft.finish(Some("user-2"));
        assert_eq!(recipe.id, "");
        assert_eq!(recipe.name, "Sendvic");
        assert_eq!(recipe.prep_time, 5);
        assert_eq!(recipe.cook_time, 0);
        assert_eq!(recipe.num_of_persons, 0);
        assert_eq!(recipe.ingredients, vec![Ingredient::new(2.0, "parceta", "hleba")]);
        assert_eq!(recipe.steps, vec!["Uzeti jedno parce hleba"]);
        assert_eq!(recipe.category, Some(RecipeCategory::Bread));
        assert!(recipe.is_my_recipe);
        assert!(!recipe.is_favorite);
        assert_eq!(recipe.creator_id, "user-2");
    }

    #[test]
    fn test_unchanged_edit_reproduces_recipe() {
        let original = rice();
        let draft = RecipeDraft::edit(&original);
        assert_eq!(draft.finish(Some("someone-else")), original);
    }

    #[test]
    fn test_edit_keeps_identity_and_flags() {
        let mut draft = RecipeDraft::edit(&rice());
        draft.name = "Pirinac sa povrcem".into();
        let key = draft.steps.append_slot();
        draft.steps.set_step(&key, "Kuvati 20ak minuta");
        // clearing a quantity removes the row on save
        draft.ingredients.set_field("1", IngredientField::Quantity(0.0));

        let recipe = draft.finish(None);
        assert_eq!(recipe.id, "r-3");
        assert!(recipe.is_favorite);
        assert_eq!(recipe.creator_id, "user-1");
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(
            recipe.steps,
            vec!["Oprati pirinac", "Dodati vodu", "Kuvati 20ak minuta"]
        );
    }

    #[test]
    fn test_edit_without_category_starts_at_cold_side_dish() {
        let recipe = Recipe::new("Supa");
        let draft = RecipeDraft::edit(&recipe);
        assert_eq!(draft.category, RecipeCategory::ColdSideDish);
    }

    #[test]
    fn test_anonymous_creator_is_empty() {
        let recipe = RecipeDraft::new().finish(None);
        assert_eq!(recipe.creator_id, "");
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.steps.is_empty());
    }
}
