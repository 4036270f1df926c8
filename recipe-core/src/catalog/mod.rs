//! In-memory recipe catalog
//!
//! Holds the canonical recipe list. `favorites`, `my_recipes` and
//! `in_category` are filters re-evaluated on every read. Every mutation
//! builds a new list and goes through [`RecipeCatalog::replace_all`], which
//! swaps the list and then notifies each observer exactly once.
//!
//! The catalog is built once by the application and passed to whoever needs
//! it; it is a single-writer structure and takes no locks. If several
//! writers ever appear, `replace_all` is the place to serialize them.

mod observer;

pub use observer::{CatalogObserver, ObserverId};

use shared::error::{AppError, AppResult};
use shared::models::{Recipe, RecipeCategory};
use shared::util::new_recipe_id;

#[derive(Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
    observers: Vec<(ObserverId, Box<dyn CatalogObserver>)>,
    next_observer: u64,
    loaded: bool,
}

impl RecipeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Observers ==========

    pub fn subscribe(&mut self, observer: impl CatalogObserver + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` when the id was not subscribed
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer, _)| *observer != id);
        self.observers.len() != before
    }

    // ========== Mutation ==========

    /// Replace the canonical list and notify observers once
    pub fn replace_all(&mut self, recipes: Vec<Recipe>) {
        self.recipes = recipes;
        tracing::info!(
            recipes = self.recipes.len(),
            observers = self.observers.len(),
            "recipe catalog replaced"
        );
        for (_, observer) in &self.observers {
            observer.recipes_changed(&self.recipes);
        }
    }

    /// Replace the list with freshly loaded recipes and mark the catalog loaded.
    ///
    /// Legacy records carry no id; each such recipe gets a fresh one here so
    /// it can be edited, favorited and removed like any other.
    pub fn load(&mut self, mut recipes: Vec<Recipe>) {
        let mut assigned = 0;
        for recipe in recipes.iter_mut().filter(|r| r.id.is_empty()) {
            recipe.id = new_recipe_id();
            assigned += 1;
        }
        if assigned > 0 {
            tracing::debug!(assigned, "ids assigned to loaded recipes");
        }

        self.loaded = true;
        self.replace_all(recipes);
    }

    /// Replace the recipe with the same id in place, or append.
    ///
    /// A recipe without an id gets a fresh one before it is appended.
    /// Returns the id the recipe is stored under.
    pub fn upsert(&mut self, mut recipe: Recipe) -> String {
        if recipe.id.is_empty() {
            recipe.id = new_recipe_id();
        }
        let id = recipe.id.clone();

        let mut recipes = self.recipes.clone();
        match recipes.iter_mut().find(|r| r.id == id) {
            Some(existing) => *existing = recipe,
            None => recipes.push(recipe),
        }
        self.replace_all(recipes);
        id
    }

    pub fn set_favorite(&mut self, id: &str, is_favorite: bool) -> AppResult<()> {
        let index = self.position(id)?;
        let mut recipes = self.recipes.clone();
        recipes[index].is_favorite = is_favorite;
        self.replace_all(recipes);
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> AppResult<Recipe> {
        let index = self.position(id)?;
        let mut recipes = self.recipes.clone();
        let removed = recipes.remove(index);
        self.replace_all(recipes);
        Ok(removed)
    }

    fn position(&self, id: &str) -> AppResult<usize> {
        if id.is_empty() {
            return Err(AppError::recipe_not_found(id));
        }
        self.recipes
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| AppError::recipe_not_found(id))
    }

    // ========== Views ==========

    /// Whether a load from a record source has completed
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn favorites(&self) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| r.is_favorite).collect()
    }

    pub fn my_recipes(&self) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| r.is_my_recipe).collect()
    }

    pub fn in_category(&self, category: RecipeCategory) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|r| r.category == Some(category))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        if id.is_empty() {
            return None;
        }
        self.recipes.iter().find(|r| r.id == id)
    }

    /// First recipe with this name. Names are not unique.
    pub fn find_by_name(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }
}

impl std::fmt::Debug for RecipeCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeCatalog")
            .field("recipes", &self.recipes)
            .field("observers", &self.observers.len())
            .field("loaded", &self.loaded)
            .finish()
    }
}
