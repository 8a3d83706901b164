//! Recipe handlers - CRUD and search over the recipe collection.
//!
//! Extractors are taken as `Result<_, Rejection>` so that malformed bodies,
//! query strings and IDs answer with the same JSON error body as domain
//! errors.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use crate::error::HttpError;
use crate::state::AppState;
use recipebox_core::{DeletedRecipe, Recipe, RecipeDraft};

/// Query string for `GET /recipes/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Substring to look for in recipe names. Missing means match all.
    #[serde(default)]
    pub search: String,
}

/// List all recipes.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Recipe>>, HttpError> {
    Ok(Json(state.recipes.list().await?))
}

/// Search recipes by name.
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Recipe>>, HttpError> {
    let Query(params) = params?;
    Ok(Json(state.recipes.search(&params.search).await?))
}

/// Get a single recipe by ID.
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Recipe>, HttpError> {
    let Path(id) = id?;
    Ok(Json(state.recipes.get(id).await?))
}

/// Create a new recipe.
pub async fn create(
    State(state): State<AppState>,
    draft: Result<Json<RecipeDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Recipe>), HttpError> {
    let Json(draft) = draft?;
    let recipe = state.recipes.create(draft).await?;
    Ok((StatusCode::CREATED, Json(recipe)))
}

/// Update an existing recipe with the supplied fields.
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    draft: Result<Json<RecipeDraft>, JsonRejection>,
) -> Result<Json<Recipe>, HttpError> {
    let Path(id) = id?;
    let Json(draft) = draft?;
    Ok(Json(state.recipes.update(id, draft).await?))
}

/// Delete a recipe.
pub async fn remove(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeletedRecipe>, HttpError> {
    let Path(id) = id?;
    Ok(Json(state.recipes.delete(id).await?))
}
