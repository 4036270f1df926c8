//! Change notification for catalog consumers

use shared::models::Recipe;

/// Receives the new canonical list after every replacement
pub trait CatalogObserver {
    fn recipes_changed(&self, recipes: &[Recipe]);
}

impl<F> CatalogObserver for F
where
    F: Fn(&[Recipe]),
{
    fn recipes_changed(&self, recipes: &[Recipe]) {
        self(recipes)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub(crate) u64);
