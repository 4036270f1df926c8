//! Recipe -> persisted record shape

use serde_json::{Map, Value, json};
use shared::models::Recipe;

use super::decode::RECIPES_KEY;
use super::issue::{DocumentIssue, RecordIssue};
use super::legacy::encode_ingredient;

/// Encoded record plus ingredients that had to be skipped
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedRecord {
    pub record: Value,
    pub issues: Vec<RecordIssue>,
}

/// Encode a recipe in the shape [`super::parse_record`] reads
pub fn to_record(recipe: &Recipe) -> EncodedRecord {
    let mut issues = Vec::new();
    let mut ingredients = Vec::with_capacity(recipe.ingredients.len());
    for (index, ingredient) in recipe.ingredients.iter().enumerate() {
        match encode_ingredient(ingredient) {
            Ok(encoded) => ingredients.push(Value::String(encoded)),
            Err(e) => issues.push(RecordIssue::UnencodableIngredient {
                index,
                reason: e.to_string(),
            }),
        }
    }

    let mut record = Map::new();
    if recipe.is_persisted() {
        record.insert("id".into(), json!(recipe.id));
    }
    record.insert("name".into(), json!(recipe.name));
    record.insert("prepTime".into(), json!(recipe.prep_time));
    record.insert("cookTime".into(), json!(recipe.cook_time));
    record.insert("numOfPersons".into(), json!(recipe.num_of_persons));
    record.insert("ingredients".into(), Value::Array(ingredients));
    record.insert("steps".into(), json!(recipe.steps));
    record.insert("isFavorite".into(), json!(recipe.is_favorite));
    record.insert("isMyRecipe".into(), json!(recipe.is_my_recipe));
    if let Some(category) = recipe.category {
        record.insert("category".into(), json!(category.code()));
    }
    record.insert("creatorID".into(), json!(recipe.creator_id));

    EncodedRecord {
        record: Value::Object(record),
        issues,
    }
}

/// Encode a whole `{"recipes": [...]}` document
pub fn to_document(recipes: &[Recipe]) -> (Value, Vec<DocumentIssue>) {
    let mut records = Vec::with_capacity(recipes.len());
    let mut issues = Vec::new();

    for (index, recipe) in recipes.iter().enumerate() {
        let encoded = to_record(recipe);
        for issue in encoded.issues {
            tracing::warn!(record = index, recipe = %recipe.name, "{}", issue);
            issues.push(DocumentIssue::at(index, issue));
        }
        records.push(encoded.record);
    }

    (json!({ RECIPES_KEY: records }), issues)
}
