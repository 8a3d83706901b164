//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router.
//! Handlers delegate to the shared `RecipeService`.

use axum::Router;
use axum::extract::OriginalUri;
use axum::http::HeaderValue;
use axum::routing::get;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::error::HttpError;
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match origin.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build all API routes without the prefix (for nesting).
///
/// Returns a router typed as `Router<AppState>` but WITHOUT `.with_state()`
/// applied. The caller must apply `.with_state()` before nesting.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/recipes",
            get(handlers::recipes::list).post(handlers::recipes::create),
        )
        // Static segment wins over `{id}`, so this never parses "search" as an ID
        .route("/recipes/search", get(handlers::recipes::search))
        .route(
            "/recipes/{id}",
            get(handlers::recipes::get)
                .put(handlers::recipes::update)
                .delete(handlers::recipes::remove),
        )
        // Unknown paths under the prefix stay JSON 404s, even with a SPA fallback
        .fallback(api_not_found)
}

/// Fallback for unmatched paths under the API prefix.
async fn api_not_found(OriginalUri(uri): OriginalUri) -> HttpError {
    HttpError::NotFound(format!("No API route for {}", uri.path()))
}

/// Normalize a configured prefix to `/segment` form (no trailing slash).
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    format!("/{trimmed}")
}

/// Create the main Axum router with all API routes.
///
/// This creates the API routes only. For serving the frontend as well,
/// use [`create_spa_router`].
///
/// An empty or `/` prefix mounts the recipe routes at the root.
pub fn create_router(ctx: AxumContext, api_prefix: &str, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);
    let api = api_routes().with_state(state).layer(cors);

    let prefix = normalize_prefix(api_prefix);
    let router = Router::new().route("/health", get(health_check));
    let router = if prefix == "/" {
        router.merge(api)
    } else {
        router.nest(&prefix, api)
    };

    router.layer(TraceLayer::new_for_http())
}

/// Create a router with API routes and static asset serving.
///
/// Serves API routes under the prefix and `/health`, then falls back to
/// files from `static_dir`, then to its `index.html`. Unknown paths under a
/// non-root prefix still answer with a JSON 404.
///
/// # Example
/// ```ignore
/// let router = create_spa_router(ctx, "./frontend", "/api", &CorsConfig::AllowAll);
/// ```
pub fn create_spa_router<P: AsRef<Path>>(
    ctx: AxumContext,
    static_dir: P,
    api_prefix: &str,
    cors_config: &CorsConfig,
) -> Router {
    let static_path = static_dir.as_ref();
    let index_path = static_path.join("index.html");

    let serve_dir = ServeDir::new(static_path).fallback(ServeFile::new(&index_path));

    // API routes take priority, then fallback to static serving
    create_router(ctx, api_prefix, cors_config).fallback_service(serve_dir)
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_prefix() {
        assert_eq!(normalize_prefix("/api"), "/api");
        assert_eq!(normalize_prefix("api/"), "/api");
        assert_eq!(normalize_prefix(" /v1/api/ "), "/v1/api");
        assert_eq!(normalize_prefix(""), "/");
        assert_eq!(normalize_prefix("/"), "/");
    }
}
