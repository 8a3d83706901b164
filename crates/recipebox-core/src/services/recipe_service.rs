//! Recipe service - the list / get / search / create / update / delete
//! operations behind every adapter.
//!
//! Each operation loads the full collection from the store. Mutations
//! change it in memory and save the whole collection back before returning.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::domain::collection::{next_id, position_of, search_by_name};
use crate::domain::{DeletedRecipe, Recipe, RecipeDraft};
use crate::ports::{CoreError, RecipeStore};

/// Service for recipe operations.
///
/// Mutations run under a write lock so that two requests in the same
/// process cannot interleave their load and save. Reads never take the
/// lock. Nothing protects against a second process writing the same file.
pub struct RecipeService {
    store: Arc<dyn RecipeStore>,
    write_lock: Mutex<()>,
}

impl RecipeService {
    /// Create a new recipe service over the given store.
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// List all recipes in stored order.
    pub async fn list(&self) -> Result<Vec<Recipe>, CoreError> {
        let recipes = self.store.load().await?;
        debug!(count = recipes.len(), "Listed recipes");
        Ok(recipes)
    }

    /// Get a single recipe by ID.
    pub async fn get(&self, id: i64) -> Result<Recipe, CoreError> {
        let recipes = self.store.load().await?;
        recipes
            .into_iter()
            .find(|r| r.id == id)
            .ok_or(CoreError::NotFound { id })
    }

    /// Recipes whose name contains `term`, case-insensitively.
    pub async fn search(&self, term: &str) -> Result<Vec<Recipe>, CoreError> {
        let recipes = self.store.load().await?;
        let matches: Vec<Recipe> = search_by_name(&recipes, term)
            .into_iter()
            .cloned()
            .collect();
        debug!(term, matches = matches.len(), "Searched recipes");
        Ok(matches)
    }

    /// Validate `draft` and append it with a fresh ID.
    pub async fn create(&self, draft: RecipeDraft) -> Result<Recipe, CoreError> {
        let new_recipe = draft.into_new_recipe()?;

        let _guard = self.write_lock.lock().await;
        let mut recipes = self.store.load().await?;
        let id = next_id(&recipes)
            .ok_or_else(|| CoreError::Internal("Recipe ID space exhausted".to_string()))?;
        let recipe = new_recipe.with_id(id);
        recipes.push(recipe.clone());
        self.store.save(&recipes).await?;

        info!(recipe_id = id, name = %recipe.name, "Created recipe");
        Ok(recipe)
    }

    /// Apply the fields supplied in `draft` to the recipe with `id`.
    ///
    /// Validation runs before the store is touched; a missing recipe leaves
    /// the stored collection unchanged.
    pub async fn update(&self, id: i64, draft: RecipeDraft) -> Result<Recipe, CoreError> {
        let patch = draft.into_patch()?;

        let _guard = self.write_lock.lock().await;
        let mut recipes = self.store.load().await?;
        let index = position_of(&recipes, id).ok_or(CoreError::NotFound { id })?;
        patch.apply(&mut recipes[index]);
        let updated = recipes[index].clone();
        self.store.save(&recipes).await?;

        info!(recipe_id = id, "Updated recipe");
        Ok(updated)
    }

    /// Remove the recipe with `id`, returning it in the confirmation.
    pub async fn delete(&self, id: i64) -> Result<DeletedRecipe, CoreError> {
        let _guard = self.write_lock.lock().await;
        let mut recipes = self.store.load().await?;
        let index = position_of(&recipes, id).ok_or(CoreError::NotFound { id })?;
        let removed = recipes.remove(index);
        self.store.save(&recipes).await?;

        info!(recipe_id = id, name = %removed.name, "Deleted recipe");
        Ok(DeletedRecipe::new(removed))
    }
}
