//! CLI bootstrap - the composition root.
//!
//! This module is the only place where the CLI wires the JSON file store to
//! the recipe service. Command handlers receive the composed [`CliContext`].

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use recipebox_core::{DataFileResolution, RecipeService, RecipeStore, resolve_data_file};
use recipebox_store::{StoreFactory, setup_data_file};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Where the recipe collection lives and why.
    pub data_file: DataFileResolution,
}

impl CliConfig {
    /// Resolve configuration from an optional `--data-file` override.
    pub fn resolve(data_file: Option<&Path>) -> Result<Self, CliError> {
        Ok(Self {
            data_file: resolve_data_file(data_file)?,
        })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    config: CliConfig,
    recipes: Arc<RecipeService>,
}

impl CliContext {
    /// Build a context over any store.
    pub fn from_store(config: CliConfig, store: Arc<dyn RecipeStore>) -> Self {
        Self {
            config,
            recipes: Arc::new(StoreFactory::build_service(store)),
        }
    }

    /// The recipe service.
    pub fn recipes(&self) -> &RecipeService {
        &self.recipes
    }

    /// The resolved configuration.
    pub const fn config(&self) -> &CliConfig {
        &self.config
    }
}

/// Bootstrap the CLI context.
///
/// Creates the data file with an empty collection if it does not exist yet.
/// Failure to do so is a [`CliError::Storage`].
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    tracing::debug!(
        target: "recipebox.paths",
        data_file = %config.data_file.path.display(),
        source = config.data_file.source.label(),
        "CLI bootstrap resolved paths"
    );

    let store = setup_data_file(&config.data_file.path)
        .await
        .map_err(|e| CliError::Storage(format!("{e:#}")))?;
    Ok(CliContext::from_store(config, store))
}
