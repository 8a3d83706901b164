//! End-to-end tests: the client against a real server on a loopback port.

use std::sync::Arc;

use recipebox_axum::{AxumContext, CorsConfig, create_router};
use recipebox_client::{ClientConfig, ClientError, DefaultRecipeClient};
use recipebox_core::RecipeDraft;
use recipebox_store::MemoryStore;
use tokio::net::TcpListener;

/// Start a server over `store` and return a client pointed at it.
async fn serve(store: MemoryStore) -> DefaultRecipeClient {
    let ctx = AxumContext::from_store(Arc::new(store));
    let router = create_router(ctx, "/api", &CorsConfig::AllowAll);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let config = ClientConfig::new().with_base_url(format!("http://{addr}/api/recipes"));
    DefaultRecipeClient::new(&config).unwrap()
}

#[tokio::test]
async fn full_lifecycle() {
    let client = serve(MemoryStore::new()).await;

    assert!(client.list_recipes().await.unwrap().is_empty());

    let draft = RecipeDraft {
        ingredients: Some(vec!["water".to_string(), "salt".to_string()]),
        prep_time: Some(15),
        ..RecipeDraft::named("Tomato Soup")
    };
    let created = client.create_recipe(&draft).await.unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.ingredients, vec!["water", "salt"]);

    let found = client.search_recipes("tomato s").await.unwrap();
    assert_eq!(found, vec![created.clone()]);

    let patch = RecipeDraft {
        instructions: Some("Simmer".to_string()),
        ..RecipeDraft::default()
    };
    let updated = client.update_recipe(1, &patch).await.unwrap();
    assert_eq!(updated.name, "Tomato Soup");
    assert_eq!(updated.instructions, "Simmer");
    assert_eq!(client.get_recipe(1).await.unwrap(), updated);

    let deleted = client.delete_recipe(1).await.unwrap();
    assert_eq!(deleted.recipe, updated);

    assert!(matches!(
        client.get_recipe(1).await,
        Err(ClientError::NotFound { id: 1 })
    ));
}

#[tokio::test]
async fn validation_failure_surfaces_server_message() {
    let client = serve(MemoryStore::new()).await;

    let err = client
        .create_recipe(&RecipeDraft::named("   "))
        .await
        .unwrap_err();

    match err {
        ClientError::Http { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Recipe name cannot be empty");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn broken_store_is_reported_as_500() {
    let client = serve(MemoryStore::from_raw("not json")).await;

    let err = client.list_recipes().await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("Failed to read recipes"));
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::new().with_base_url(format!("http://{addr}/api/recipes"));
    let client = DefaultRecipeClient::new(&config).unwrap();

    assert!(matches!(
        client.list_recipes().await,
        Err(ClientError::Network(_))
    ));
}
