//! Loosely-typed record -> Recipe
//!
//! Each recognized field has an independent decode rule. A field that is
//! absent keeps its default, a field with the wrong shape is treated as
//! absent and reported, unknown fields are ignored. Decoding never fails.

use serde_json::{Map, Value};
use shared::models::{Recipe, RecipeCategory};

use super::issue::{DocumentIssue, RecordIssue};
use super::legacy::{decode_ingredient, split_parts};

/// Top-level key holding the record array
pub const RECIPES_KEY: &str = "recipes";

/// Best-effort recipe plus everything that had to be repaired
#[derive(Debug, Clone, PartialEq)]
pub struct RecordReport {
    pub recipe: Recipe,
    pub issues: Vec<RecordIssue>,
}

impl RecordReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// All recipes of a document plus their diagnostics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentReport {
    pub recipes: Vec<Recipe>,
    pub issues: Vec<DocumentIssue>,
}

/// Decode one record, discarding diagnostics
pub fn parse(record: &Value) -> Recipe {
    parse_record(record).recipe
}

/// Decode one record
pub fn parse_record(record: &Value) -> RecordReport {
    let mut decoder = RecordDecoder::default();
    let recipe = match record.as_object() {
        Some(fields) => decoder.decode(fields),
        None => {
            decoder.issues.push(RecordIssue::RecordNotMapping);
            default_recipe()
        }
    };

    RecordReport {
        recipe,
        issues: decoder.issues,
    }
}

/// Decode a `{"recipes": [...]}` document
pub fn parse_document(document: &Value) -> DocumentReport {
    let mut report = DocumentReport::default();

    let records = match document.get(RECIPES_KEY) {
        Some(Value::Array(records)) => records,
        Some(_) => {
            report.issues.push(DocumentIssue::document(RecordIssue::malformed(
                RECIPES_KEY,
                "an array of records",
            )));
            return report;
        }
        None => {
            if !document.is_object() {
                report
                    .issues
                    .push(DocumentIssue::document(RecordIssue::RecordNotMapping));
            }
            return report;
        }
    };

    for (index, record) in records.iter().enumerate() {
        let RecordReport { recipe, issues } = parse_record(record);
        for issue in issues {
            tracing::debug!(record = index, code = %issue.code(), "{}", issue);
            report.issues.push(DocumentIssue::at(index, issue));
        }
        report.recipes.push(recipe);
    }

    report
}

/// Recipe produced for an empty or unusable record
fn default_recipe() -> Recipe {
    Recipe {
        category: Some(RecipeCategory::FALLBACK),
        ..Recipe::default()
    }
}

#[derive(Default)]
struct RecordDecoder {
    issues: Vec<RecordIssue>,
}

impl RecordDecoder {
    fn decode(&mut self, fields: &Map<String, Value>) -> Recipe {
        let mut recipe = default_recipe();

        for (key, value) in fields {
            match key.as_str() {
                "id" => recipe.id = self.string(key, value),
                "name" => recipe.name = self.string(key, value),
                "creatorID" => recipe.creator_id = self.string(key, value),
                "prepTime" => recipe.prep_time = self.count(key, value),
                "cookTime" => recipe.cook_time = self.count(key, value),
                "numOfPersons" => recipe.num_of_persons = self.count(key, value),
                "isFavorite" => recipe.is_favorite = self.flag(key, value),
                "isMyRecipe" => recipe.is_my_recipe = self.flag(key, value),
                "category" => recipe.category = Some(self.category(key, value)),
                "ingredients" => {
                    recipe.ingredients = self
                        .strings(key, value)
                        .map(|raw| self.ingredients(&raw))
                        .unwrap_or_default()
                }
                "steps" => recipe.steps = self.strings(key, value).unwrap_or_default(),
                _ => {}
            }
        }

        recipe
    }

    fn string(&mut self, field: &str, value: &Value) -> String {
        match value.as_str() {
            Some(s) => s.to_string(),
            None => {
                self.issues.push(RecordIssue::malformed(field, "a string"));
                String::new()
            }
        }
    }

    fn count(&mut self, field: &str, value: &Value) -> u32 {
        match as_count(value) {
            Some(n) => n,
            None => {
                self.issues
                    .push(RecordIssue::malformed(field, "a non-negative integer"));
                0
            }
        }
    }

    fn flag(&mut self, field: &str, value: &Value) -> bool {
        match value.as_bool() {
            Some(b) => b,
            None => {
                self.issues.push(RecordIssue::malformed(field, "a boolean"));
                false
            }
        }
    }

    fn category(&mut self, field: &str, value: &Value) -> RecipeCategory {
        let Some(code) = as_integer(value) else {
            self.issues.push(RecordIssue::malformed(field, "an integer"));
            return RecipeCategory::FALLBACK;
        };

        RecipeCategory::from_code_strict(code).unwrap_or_else(|_| {
            self.issues.push(RecordIssue::UnknownCategoryCode { code });
            RecipeCategory::FALLBACK
        })
    }

    /// Array whose every element is a string; anything else is malformed as a whole
    fn strings(&mut self, field: &str, value: &Value) -> Option<Vec<String>> {
        let strings = value.as_array().and_then(|items| {
            items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
        });
        if strings.is_none() {
            self.issues
                .push(RecordIssue::malformed(field, "an array of strings"));
        }
        strings
    }

    fn ingredients(&mut self, raw: &[String]) -> Vec<shared::Ingredient> {
        let mut ingredients = Vec::with_capacity(raw.len());
        for (index, encoded) in raw.iter().enumerate() {
            match decode_ingredient(encoded) {
                Some(decoded) => {
                    if decoded.quantity_defaulted {
                        self.issues.push(RecordIssue::UnparseableQuantity {
                            index,
                            raw: encoded.clone(),
                        });
                    }
                    ingredients.push(decoded.ingredient);
                }
                None => self.issues.push(RecordIssue::MalformedIngredientEncoding {
                    index,
                    raw: encoded.clone(),
                    parts: split_parts(encoded).len(),
                }),
            }
        }
        ingredients
    }
}

/// Integer value, accepting whole-valued floats
fn as_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn as_count(value: &Value) -> Option<u32> {
    as_integer(value).and_then(|n| u32::try_from(n).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::models::Ingredient;

    fn full_record() -> Value {
        json!({
            "id": "r-17",
            "name": "Cezar salata",
            "prepTime": 75,
            "cookTime": 20,
            "ingredients": ["400_grama_slanina", "2_glavice_zelena salata", "0.5_kg_pilece belo"],
            "steps": ["Iseckati slaninu na kockice", "Proprziti slaninu", ""],
            "isFavorite": true,
            "isMyRecipe": true,
            "category": 7,
            "numOfPersons": 6,
            "creatorID": "user-1"
        })
    }

    #[test]
    fn test_well_formed_record_reproduces_every_field() {
        let report = parse_record(&full_record());
        assert!(report.is_clean(), "{:?}", report.issues);

        let recipe = report.recipe;
        assert_eq!(recipe.id, "r-17");
        assert_eq!(recipe.name, "Cezar salata");
        assert_eq!(recipe.prep_time, 75);
        assert_eq!(recipe.cook_time, 20);
        assert_eq!(
            recipe.ingredients,
            vec![
                Ingredient::new(400.0, "grama", "slanina"),
                Ingredient::new(2.0, "glavice", "zelena salata"),
                Ingredient::new(0.5, "kg", "pilece belo"),
            ]
        );
        // steps are copied verbatim, empty ones included
        assert_eq!(
            recipe.steps,
            vec!["Iseckati slaninu na kockice", "Proprziti slaninu", ""]
        );
        assert!(recipe.is_favorite);
        assert!(recipe.is_my_recipe);
        assert_eq!(recipe.category, Some(RecipeCategory::Salad));
        assert_eq!(recipe.num_of_persons, 6);
        assert_eq!(recipe.creator_id, "user-1");
    }

    #[test]
    fn test_empty_record_yields_defaults() {
        let report = parse_record(&json!({}));
        assert!(report.is_clean());

        let recipe = report.recipe;
        assert_eq!(recipe.name, "");
        assert_eq!(recipe.prep_time, 0);
        assert_eq!(recipe.cook_time, 0);
        assert_eq!(recipe.num_of_persons, 0);
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.steps.is_empty());
        assert!(!recipe.is_favorite);
        assert!(!recipe.is_my_recipe);
        assert_eq!(recipe.category, Some(RecipeCategory::Snack));
        assert_eq!(recipe.creator_id, "");
        assert_eq!(recipe.id, "");
    }

    #[test]
    fn test_malformed_ingredient_is_dropped_alone() {
        let report = parse_record(&json!({
            "ingredients": ["3_komada_jaja", "bad_encoding", "20_grama_sira"]
        }));

        assert_eq!(
            report.recipe.ingredients,
            vec![
                Ingredient::new(3.0, "komada", "jaja"),
                Ingredient::new(20.0, "grama", "sira"),
            ]
        );
        assert_eq!(
            report.issues,
            vec![RecordIssue::MalformedIngredientEncoding {
                index: 1,
                raw: "bad_encoding".into(),
                parts: 2,
            }]
        );
    }

    #[test]
    fn test_unparseable_quantity_keeps_ingredient() {
        let report = parse_record(&json!({ "ingredients": ["malo_prstohvat_soli"] }));
        assert_eq!(
            report.recipe.ingredients,
            vec![Ingredient::new(0.0, "prstohvat", "soli")]
        );
        assert_eq!(report.issues[0].code(), shared::ErrorCode::UnparseableQuantity);
    }

    #[test]
    fn test_out_of_range_category_falls_back_to_snack() {
        let report = parse_record(&json!({ "category": 42 }));
        assert_eq!(report.recipe.category, Some(RecipeCategory::Snack));
        assert_eq!(
            report.issues,
            vec![RecordIssue::UnknownCategoryCode { code: 42 }]
        );

        let report = parse_record(&json!({ "category": "2" }));
        assert_eq!(report.recipe.category, Some(RecipeCategory::Snack));
        assert_eq!(report.issues[0].code(), shared::ErrorCode::MalformedField);
    }

    #[test]
    fn test_wrong_shapes_are_treated_as_absent() {
        let report = parse_record(&json!({
            "name": 12,
            "prepTime": "15",
            "cookTime": -5,
            "numOfPersons": 2.5,
            "isFavorite": "yes",
            "steps": ["one", 2],
            "ingredients": "3_komada_jaja",
            "creatorID": null
        }));

        let recipe = &report.recipe;
        assert_eq!(recipe.name, "");
        assert_eq!(recipe.prep_time, 0);
        assert_eq!(recipe.cook_time, 0);
        assert_eq!(recipe.num_of_persons, 0);
        assert!(!recipe.is_favorite);
        assert!(recipe.steps.is_empty());
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.creator_id, "");
        assert_eq!(report.issues.len(), 8);
        assert!(
            report
                .issues
                .iter()
                .all(|i| i.code() == shared::ErrorCode::MalformedField)
        );
    }

    #[test]
    fn test_whole_floats_are_accepted_as_integers() {
        let recipe = parse(&json!({ "prepTime": 15.0, "category": 2.0 }));
        assert_eq!(recipe.prep_time, 15);
        assert_eq!(recipe.category, Some(RecipeCategory::MainDish));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let report = parse_record(&json!({ "name": "Omlet", "rating": 5, "tags": ["brzo"] }));
        assert!(report.is_clean());
        assert_eq!(report.recipe.name, "Omlet");
    }

    #[test]
    fn test_non_mapping_record() {
        let report = parse_record(&json!(["Omlet", 15]));
        assert_eq!(report.recipe, default_recipe());
        assert_eq!(report.issues, vec![RecordIssue::RecordNotMapping]);
    }

    #[test]
    fn test_parse_document() {
        let document = json!({
            "recipes": [
                { "name": "Omlet", "ingredients": ["3_komada_jaja"] },
                "not a record",
                { "name": "Pirinac", "category": 99 }
            ]
        });

        let report = parse_document(&document);
        assert_eq!(report.recipes.len(), 3);
        assert_eq!(report.recipes[0].name, "Omlet");
        assert_eq!(report.recipes[1].name, "");
        assert_eq!(report.recipes[2].category, Some(RecipeCategory::Snack));

        let records: Vec<Option<usize>> = report.issues.iter().map(|i| i.record).collect();
        assert_eq!(records, vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_parse_document_without_recipes() {
        let report = parse_document(&json!({ "version": 2 }));
        assert!(report.recipes.is_empty());
        assert!(report.issues.is_empty());

        let report = parse_document(&json!({ "recipes": {} }));
        assert!(report.recipes.is_empty());
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].record, None);

        let report = parse_document(&json!([1, 2, 3]));
        assert!(report.recipes.is_empty());
        assert_eq!(report.issues[0].issue, RecordIssue::RecordNotMapping);
    }
}
