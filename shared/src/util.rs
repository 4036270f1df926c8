/// Generate a new recipe id (UUID v4, hyphenated)
pub fn new_recipe_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
