//! Integration tests for the recipe routes.
//!
//! These tests drive the full router over an in-memory store and check the
//! status codes and JSON bodies clients rely on.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{pasta, router_over, router_with, send};
use recipebox_core::RecipeStore;
use recipebox_store::MemoryStore;
use std::sync::Arc;

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let (_, app) = router_with(&[]);
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("OK"));
}

#[tokio::test]
async fn list_returns_json_array() {
    let (_, app) = router_with(&[pasta()]);

    let (status, body) = send(&app, "GET", "/api/recipes", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], 1);
    assert_eq!(body[0]["prepTime"], 20);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn get_existing_and_missing() {
    let (_, app) = router_with(&[pasta()]);

    let (status, body) = send(&app, "GET", "/api/recipes/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Pasta");

    let (status, body) = send(&app, "GET", "/api/recipes/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
    assert_eq!(body["error"], "Recipe 42 not found");
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let (_, app) = router_with(&[pasta()]);
    let (status, body) = send(&app, "GET", "/api/recipes/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn search_matches_case_insensitively() {
    let (_, app) = router_with(&[pasta()]);

    let (status, body) = send(&app, "GET", "/api/recipes/search?search=past", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([serde_json::to_value(pasta()).unwrap()]));

    let (status, body) = send(&app, "GET", "/api/recipes/search?search=xyz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn search_decodes_url_encoded_term() {
    let mut second = pasta();
    second.id = 2;
    second.name = "Mac and Cheese".to_string();
    let (_, app) = router_with(&[pasta(), second]);

    let (_, body) = send(&app, "GET", "/api/recipes/search?search=and%20CHEESE", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], 2);
}

#[tokio::test]
async fn search_without_term_returns_everything() {
    let (_, app) = router_with(&[pasta()]);
    let (status, body) = send(&app, "GET", "/api/recipes/search", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn create_returns_201_with_assigned_id() {
    let (store, app) = router_with(&[]);

    let (status, body) = send(
        &app,
        "POST",
        "/api/recipes",
        Some(r#"{"name":"Soup","ingredients":["water"],"instructions":"boil","prepTime":10}"#),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Soup");
    assert!(body.get("image").is_none());
    assert_eq!(store.load().await.unwrap().len(), 1);
}

#[tokio::test]
async fn create_without_name_is_bad_request() {
    let (store, app) = router_with(&[]);

    let (status, body) = send(&app, "POST", "/api/recipes", Some(r#"{"prepTime":10}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Recipe name is required");
    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_with_negative_prep_time_is_bad_request() {
    let (_, app) = router_with(&[]);
    let (status, body) = send(
        &app,
        "POST",
        "/api/recipes",
        Some(r#"{"name":"Soup","prepTime":-3}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("-3"));
}

#[tokio::test]
async fn malformed_json_body_is_bad_request() {
    let (_, app) = router_with(&[]);
    let (status, body) = send(&app, "POST", "/api/recipes", Some("{\"name\": ")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn update_changes_only_supplied_fields() {
    let (_, app) = router_with(&[pasta()]);

    let (status, body) = send(
        &app,
        "PUT",
        "/api/recipes/1",
        Some(r#"{"id": 77, "name":"New Name"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "New Name");
    assert_eq!(body["ingredients"], json!(["pasta", "water"]));
    assert_eq!(body["prepTime"], 20);
}

#[tokio::test]
async fn update_missing_is_not_found_and_changes_nothing() {
    let (store, app) = router_with(&[pasta()]);
    let before = store.raw().await;

    let (status, _) = send(&app, "PUT", "/api/recipes/999", Some(r#"{"name":"X"}"#)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(store.raw().await, before);
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let (_, app) = router_with(&[pasta()]);

    let (status, body) = send(&app, "DELETE", "/api/recipes/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recipe"]["id"], 1);
    assert_eq!(body["message"], "Recipe 1 deleted");

    let (status, _) = send(&app, "GET", "/api/recipes/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/api/recipes/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_store_is_server_error_not_crash() {
    let app = router_over(Arc::new(MemoryStore::from_raw("][")));

    for (method, uri, body) in [
        ("GET", "/api/recipes", None),
        ("GET", "/api/recipes/1", None),
        ("GET", "/api/recipes/search?search=a", None),
        ("POST", "/api/recipes", Some(r#"{"name":"Soup"}"#)),
        ("PUT", "/api/recipes/1", Some(r#"{"name":"Soup"}"#)),
        ("DELETE", "/api/recipes/1", None),
    ] {
        let (status, json) = send(&app, method, uri, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{method} {uri}");
        assert!(json["error"].as_str().unwrap().starts_with("Failed to read recipes"));
    }

    // The router is still serving afterwards
    let (status, _) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn unknown_api_path_is_404() {
    let (_, app) = router_with(&[]);
    let (status, _) = send(&app, "GET", "/api/nothing-here", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
