//! Recipe store trait definition.
//!
//! This port defines the interface for persisting the recipe collection.
//! Implementations handle all storage details internally.

use async_trait::async_trait;

use super::StoreError;
use crate::domain::Recipe;

/// Durable storage for the whole recipe collection.
///
/// There is no per-recipe access: callers load everything, change it in
/// memory and save everything back. Implementations must not cache, so a
/// `load` after a `save` always sees the saved collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Load the full collection, in stored order.
    ///
    /// Fails with [`StoreError::Read`] when the backing data is missing,
    /// unreadable or malformed. No partial result is returned.
    async fn load(&self) -> Result<Vec<Recipe>, StoreError>;

    /// Replace the stored collection with `recipes`.
    async fn save(&self, recipes: &[Recipe]) -> Result<(), StoreError>;
}
