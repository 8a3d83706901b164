//! Recipe operations.

use reqwest::Method;

use recipebox_core::{DeletedRecipe, Recipe, RecipeDraft};

use super::RecipeClient;
use crate::error::ClientResult;
use crate::http::HttpBackend;

impl<B: HttpBackend> RecipeClient<B> {
    /// Fetch every recipe.
    pub async fn list_recipes(&self) -> ClientResult<Vec<Recipe>> {
        let url = self.url("")?;
        self.request(Method::GET, url, None, None).await
    }

    /// Fetch recipes whose name contains `term`, ignoring case.
    pub async fn search_recipes(&self, term: &str) -> ClientResult<Vec<Recipe>> {
        let url = self.url(&format!("/search?search={}", urlencoding::encode(term)))?;
        self.request(Method::GET, url, None, None).await
    }

    /// Fetch one recipe by ID.
    pub async fn get_recipe(&self, id: i64) -> ClientResult<Recipe> {
        let url = self.url(&format!("/{id}"))?;
        self.request(Method::GET, url, None, Some(id)).await
    }

    /// Create a recipe. The server assigns the ID.
    pub async fn create_recipe(&self, draft: &RecipeDraft) -> ClientResult<Recipe> {
        let url = self.url("")?;
        let body = serde_json::to_string(draft)?;
        self.request(Method::POST, url, Some(body), None).await
    }

    /// Update the supplied fields of a recipe.
    pub async fn update_recipe(&self, id: i64, draft: &RecipeDraft) -> ClientResult<Recipe> {
        let url = self.url(&format!("/{id}"))?;
        let body = serde_json::to_string(draft)?;
        self.request(Method::PUT, url, Some(body), Some(id)).await
    }

    /// Delete a recipe, returning the server's confirmation.
    pub async fn delete_recipe(&self, id: i64) -> ClientResult<DeletedRecipe> {
        let url = self.url(&format!("/{id}"))?;
        self.request(Method::DELETE, url, None, Some(id)).await
    }
}
