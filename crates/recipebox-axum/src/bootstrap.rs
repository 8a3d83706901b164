//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use recipebox_core::{RecipeService, RecipeStore};
use recipebox_store::{StoreFactory, setup_data_file};

/// Default HTTP port, matching the browser frontend's API URL.
pub const DEFAULT_PORT: u16 = 3000;

/// Default prefix under which recipe routes are mounted.
pub const DEFAULT_API_PREFIX: &str = "/api";

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// JSON file holding the recipe collection.
    pub data_file: PathBuf,
    /// Prefix for the recipe routes (e.g. `/api`).
    pub api_prefix: String,
    /// Optional path to static assets for frontend serving.
    pub static_dir: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with defaults for everything except the data file.
    pub fn for_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            data_file: data_file.into(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            static_dir: None,
            cors: CorsConfig::default(),
        }
    }

    /// Set the static directory for frontend serving.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// Socket address string to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application context for the Axum adapter.
///
/// Holds the services needed by API handlers.
pub struct AxumContext {
    /// The recipe service (the controller layer).
    pub recipes: Arc<RecipeService>,
}

impl AxumContext {
    /// Build a context over any store (used by tests with `MemoryStore`).
    pub fn from_store(store: Arc<dyn RecipeStore>) -> Self {
        Self {
            recipes: Arc::new(StoreFactory::build_service(store)),
        }
    }
}

/// Bootstrap the Axum server context.
///
/// Prepares the data file (creating an empty collection if missing) and
/// wires the recipe service to it.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        target: "recipebox.paths",
        data_file = %config.data_file.display(),
        static_dir = ?config.static_dir,
        "Axum bootstrap resolved paths"
    );

    let store = setup_data_file(&config.data_file).await?;
    Ok(AxumContext::from_store(store))
}

/// Start the web server and run until Ctrl+C.
///
/// If `config.static_dir` is set, serves static assets as fallback.
/// Otherwise, serves only the API endpoints.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;

    let app = if let Some(ref static_dir) = config.static_dir {
        info!("Serving static assets from: {}", static_dir.display());
        crate::routes::create_spa_router(ctx, static_dir, &config.api_prefix, &config.cors)
    } else {
        crate::routes::create_router(ctx, &config.api_prefix, &config.cors)
    };

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    if config.static_dir.is_some() {
        info!("recipebox web server (with UI) listening on http://{}", addr);
    } else {
        info!("recipebox web server (API only) listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("recipebox web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
