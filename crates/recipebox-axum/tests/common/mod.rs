//! Shared helpers for router integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use recipebox_axum::{AxumContext, CorsConfig, create_router};
use recipebox_core::Recipe;
use recipebox_store::MemoryStore;

/// Router over an in-memory store seeded with `recipes`.
pub fn router_with(recipes: &[Recipe]) -> (Arc<MemoryStore>, Router) {
    let store = Arc::new(MemoryStore::with_recipes(recipes).unwrap());
    let router = router_over(store.clone());
    (store, router)
}

/// Router over the given store, mounted at `/api`.
pub fn router_over(store: Arc<MemoryStore>) -> Router {
    create_router(AxumContext::from_store(store), "/api", &CorsConfig::AllowAll)
}

/// Send one request and return the status and parsed JSON body.
///
/// Non-JSON bodies come back as a JSON string.
pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, json)
}

pub fn pasta() -> Recipe {
    Recipe {
        id: 1,
        name: "Pasta".to_string(),
        ingredients: vec!["pasta".to_string(), "water".to_string()],
        instructions: "Boil".to_string(),
        prep_time: 20,
        image: None,
    }
}
