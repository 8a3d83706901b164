//! Composition utilities for building a `RecipeService` over a store.
//!
//! This module provides factory functions for wiring the service to a
//! concrete store. It is focused purely on construction and should not
//! contain any domain logic.

use std::path::PathBuf;
use std::sync::Arc;

use recipebox_core::{RecipeService, RecipeStore};

use crate::stores::{JsonFileStore, MemoryStore};

/// Factory for creating store instances and the service on top of them.
pub struct StoreFactory;

impl StoreFactory {
    /// Create a file-backed store. The file is not touched.
    pub fn json_file(path: impl Into<PathBuf>) -> Arc<JsonFileStore> {
        Arc::new(JsonFileStore::new(path))
    }

    /// Create an empty in-memory store.
    pub fn memory() -> Arc<MemoryStore> {
        Arc::new(MemoryStore::new())
    }

    /// Build a `RecipeService` over any store.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = setup_data_file(&resolution.path).await?;
    /// let service = StoreFactory::build_service(store);
    /// ```
    pub fn build_service(store: Arc<dyn RecipeStore>) -> RecipeService {
        RecipeService::new(store)
    }
}
