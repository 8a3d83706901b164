//! Recipe API client.
//!
//! The client is generic over its HTTP backend. Production code uses
//! [`DefaultRecipeClient`]; tests plug in a fake backend.

mod recipes;

use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::warn;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::http::{HttpBackend, HttpResponse, ReqwestBackend};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default recipe client using the reqwest HTTP backend.
pub type DefaultRecipeClient = RecipeClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the recipebox HTTP API.
pub struct RecipeClient<B: HttpBackend> {
    backend: B,
    /// Collection URL without a trailing slash
    base_url: String,
}

impl DefaultRecipeClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails if the base URL does not parse or the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let backend = ReqwestBackend::new(config)?;
        Self::with_backend(config, backend)
    }

    /// Create a new client with default configuration.
    pub fn default_client() -> ClientResult<Self> {
        Self::new(&ClientConfig::default())
    }
}

impl<B: HttpBackend> RecipeClient<B> {
    /// Create a client over a specific backend.
    pub(crate) fn with_backend(config: &ClientConfig, backend: B) -> ClientResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;
        Ok(Self { backend, base_url })
    }

    /// The collection URL requests are built from.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL below the collection, e.g. `""`, `"/3"` or `"/search?search=x"`.
    fn url(&self, suffix: &str) -> ClientResult<Url> {
        Ok(Url::parse(&format!("{}{suffix}", self.base_url))?)
    }

    /// Send a request and decode a successful JSON response.
    ///
    /// `recipe_id` is set for routes addressing one recipe, so a 404 there
    /// becomes [`ClientError::NotFound`].
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<String>,
        recipe_id: Option<i64>,
    ) -> ClientResult<T> {
        let result = self.exchange(method.clone(), &url, body, recipe_id).await;
        if let Err(ref e) = result {
            warn!(%method, %url, error = %e, "Recipe API request failed");
        }
        result
    }

    async fn exchange<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &Url,
        body: Option<String>,
        recipe_id: Option<i64>,
    ) -> ClientResult<T> {
        let response = self.backend.send(method, url, body).await?;

        if !response.is_success() {
            return Err(error_from_response(&response, recipe_id));
        }

        Ok(serde_json::from_str(&response.body)?)
    }
}

/// Map a non-success response to a client error.
fn error_from_response(response: &HttpResponse, recipe_id: Option<i64>) -> ClientError {
    if response.status == 404 {
        if let Some(id) = recipe_id {
            return ClientError::NotFound { id };
        }
    }

    ClientError::Http {
        status: response.status,
        message: error_message(response),
    }
}

/// Pull `error` out of a `{ "error": ... }` body, else fall back to the status reason.
fn error_message(response: &HttpResponse) -> String {
    serde_json::from_str::<serde_json::Value>(&response.body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| {
            reqwest::StatusCode::from_u16(response.status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Unknown error")
                .to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeBackend;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_default_client_creation() {
        let client = DefaultRecipeClient::default_client().unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000/api/recipes");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ClientConfig::new().with_base_url("http://example.test/api/recipes/");
        let client = RecipeClient::with_backend(&config, FakeBackend::new()).unwrap();
        assert_eq!(client.base_url(), "http://example.test/api/recipes");
        assert_eq!(
            client.url("/5").unwrap().as_str(),
            "http://example.test/api/recipes/5"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = ClientConfig::new().with_base_url("not a url");
        let result = RecipeClient::with_backend(&config, FakeBackend::new());
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_error_message_prefers_server_body() {
        let r = response(500, r#"{"error": "Failed to read recipes: boom", "status": 500}"#);
        assert_eq!(error_message(&r), "Failed to read recipes: boom");
    }

    #[test]
    fn test_error_message_falls_back_to_reason() {
        assert_eq!(error_message(&response(502, "<html>")), "Bad Gateway");
        assert_eq!(error_message(&response(599, "")), "Unknown error");
    }

    #[test]
    fn test_404_maps_to_not_found_only_for_id_routes() {
        let r = response(404, r#"{"error": "Recipe 3 not found", "status": 404}"#);
        assert!(matches!(
            error_from_response(&r, Some(3)),
            ClientError::NotFound { id: 3 }
        ));
        assert!(matches!(
            error_from_response(&r, None),
            ClientError::Http { status: 404, .. }
        ));
    }
}
