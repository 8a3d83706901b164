//! HTTP backend abstraction for the recipe API.
//!
//! The client talks to the server through [`HttpBackend`] so tests can swap
//! in a fake that returns canned responses and records what was sent.

use async_trait::async_trait;
use reqwest::Method;
use url::Url;

use crate::config::ClientConfig;
use crate::error::ClientResult;

/// Status and body of a completed HTTP exchange.
///
/// Non-success statuses are returned here, not as errors; the client decides
/// how to interpret them.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Trait for HTTP backends that can send a JSON request.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Send `body` (already-encoded JSON) with `method` to `url`.
    async fn send(&self, method: Method, url: &Url, body: Option<String>)
    -> ClientResult<HttpResponse>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn send(
        &self,
        method: Method,
        url: &Url,
        body: Option<String>,
    ) -> ClientResult<HttpResponse> {
        let mut request = self
            .client
            .request(method, url.as_str())
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(body) = body {
            request = request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
