//! Data file setup.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::factory::StoreFactory;
use crate::stores::JsonFileStore;

/// Prepare the data file at `path` and return a store for it.
///
/// Creates the parent directory and an empty collection when the file does
/// not exist yet. An existing file is left untouched, even if it is
/// malformed; that surfaces later as a read error on the first request.
pub async fn setup_data_file(path: &Path) -> Result<Arc<JsonFileStore>> {
    let store = StoreFactory::json_file(path);
    let created = store
        .ensure_exists()
        .await
        .with_context(|| format!("Failed to initialize data file {}", path.display()))?;

    if created {
        tracing::info!(path = %store.path().display(), "Created empty recipe collection");
    } else {
        tracing::debug!(path = %store.path().display(), "Using existing recipe collection");
    }

    Ok(store)
}
