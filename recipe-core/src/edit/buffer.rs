//! Sparse, string-keyed edit buffer

use std::collections::{BTreeMap, BTreeSet};

use shared::models::{Ingredient, Recipe};

use super::slot::{SlotKey, SlotValue};

/// Number of blank rows a new recipe form starts with
pub const LEGACY_BLANK_ROWS: usize = 3;

/// Rows being edited, addressed by textual slot key.
///
/// Rows can be added at the end and updated independently without
/// re-indexing the rest. [`compact`](Self::compact) is the single point
/// that turns the buffer back into a dense ordered list.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseEditBuffer<T> {
    slots: BTreeMap<SlotKey, T>,
}

pub type IngredientBuffer = SparseEditBuffer<Ingredient>;
pub type StepBuffer = SparseEditBuffer<String>;

/// One editable field of an ingredient row
#[derive(Debug, Clone, PartialEq)]
pub enum IngredientField {
    Quantity(f64),
    Unit(String),
    Name(String),
}

impl<T> Default for SparseEditBuffer<T> {
    fn default() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }
}

impl<T: SlotValue> SparseEditBuffer<T> {
    /// Buffer with no slots
    pub fn new() -> Self {
        Self::default()
    }

    /// Slots `"0"..count` holding placeholders
    pub fn with_blank_rows(count: usize) -> Self {
        let mut buffer = Self::new();
        for _ in 0..count {
            buffer.append_slot();
        }
        buffer
    }

    /// Form for a new recipe: three blank rows
    pub fn seed_empty() -> Self {
        Self::with_blank_rows(LEGACY_BLANK_ROWS)
    }

    /// Slot `i` holds `items[i]`; an empty list seeds one blank slot `"0"`
    pub fn seed_from(items: &[T]) -> Self {
        if items.is_empty() {
            return Self::with_blank_rows(1);
        }
        let slots = items
            .iter()
            .enumerate()
            .map(|(i, item)| (SlotKey::from_index(i as i64), item.clone()))
            .collect();
        Self { slots }
    }

    /// Restore a buffer from arbitrary textual keys
    pub fn from_slots<K, I>(slots: I) -> Self
    where
        K: Into<SlotKey>,
        I: IntoIterator<Item = (K, T)>,
    {
        Self {
            slots: slots.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(&SlotKey::parse(key))
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.slots.get(&SlotKey::parse(key))
    }

    /// Slot keys in compaction order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(SlotKey::as_str)
    }

    /// Insert or overwrite a slot, returning the previous value
    pub fn insert(&mut self, key: impl Into<SlotKey>, value: T) -> Option<T> {
        self.slots.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<T> {
        self.slots.remove(&SlotKey::parse(key))
    }

    /// Replace the value of an existing slot. Missing slots are left alone
    /// and `false` is returned; slots are never created here.
    pub fn replace(&mut self, key: &str, value: T) -> bool {
        match self.slots.get_mut(&SlotKey::parse(key)) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => {
                tracing::debug!(slot = key, "edit on missing slot ignored");
                false
            }
        }
    }

    /// Add a placeholder under the next unused integer key and return the key.
    ///
    /// The key is one past the highest index. When that would overflow, the
    /// smallest unused non-negative index is taken instead.
    pub fn append_slot(&mut self) -> String {
        let key = SlotKey::from_index(self.next_free_index());
        let raw = key.as_str().to_string();
        self.slots.insert(key, T::placeholder());
        raw
    }

    fn next_free_index(&self) -> i64 {
        let Some(max) = self.slots.keys().map(SlotKey::index).max() else {
            return 0;
        };
        if let Some(next) = max.checked_add(1) {
            return next;
        }

        let used: BTreeSet<i64> = self.slots.keys().map(SlotKey::index).collect();
        let mut free = 0;
        for &taken in used.range(0..) {
            if taken != free {
                break;
            }
            free += 1;
        }
        free
    }

    /// Non-blank values ordered by numeric slot key
    pub fn compact(&self) -> Vec<T> {
        self.slots
            .values()
            .filter(|value| !value.is_blank())
            .cloned()
            .collect()
    }
}

impl IngredientBuffer {
    pub fn seed_from_recipe(recipe: &Recipe) -> Self {
        Self::seed_from(&recipe.ingredients)
    }

    /// Update one field of the ingredient at `key`.
    ///
    /// No-op returning `false` when the slot is missing or the quantity is
    /// negative or not finite.
    pub fn set_field(&mut self, key: &str, field: IngredientField) -> bool {
        if let IngredientField::Quantity(quantity) = field {
            if !quantity.is_finite() || quantity < 0.0 {
                tracing::debug!(slot = key, quantity, "invalid quantity rejected");
                return false;
            }
        }
        let Some(current) = self.get(key) else {
            tracing::debug!(slot = key, "edit on missing slot ignored");
            return false;
        };
        let updated = match field {
            IngredientField::Quantity(quantity) => current.with_quantity(quantity),
            IngredientField::Unit(unit) => current.with_measure_unit(unit),
            IngredientField::Name(name) => current.with_ingredient(name),
        };
        self.replace(key, updated)
    }
}

impl StepBuffer {
    pub fn seed_from_recipe(recipe: &Recipe) -> Self {
        Self::seed_from(&recipe.steps)
    }

    /// Set the step text at `key`; no-op when the slot is missing
    pub fn set_step(&mut self, key: &str, text: impl Into<String>) -> bool {
        self.replace(key, text.into())
    }
}
