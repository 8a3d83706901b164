//! File-backed implementation of the `RecipeStore` trait.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use recipebox_core::{Recipe, RecipeStore, StoreError};

use crate::codec;

/// Stores the whole collection in one JSON file.
///
/// Every `load` reads and parses the file; every `save` rewrites it. The
/// file handle lives only for the duration of each call.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the file at `path`. The file is not touched.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the parent directory and an empty collection if the file is
    /// missing.
    ///
    /// Returns `true` when the file was created.
    pub async fn ensure_exists(&self) -> Result<bool, StoreError> {
        if fs::try_exists(&self.path)
            .await
            .map_err(|e| self.write_error(&e))?
        {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.write_error(&e))?;
        }
        self.save(&[]).await?;
        Ok(true)
    }

    /// Sibling temp file used for atomic replacement.
    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map_or_else(|| "recipes".into(), |n| n.to_string_lossy().into_owned());
        self.path
            .with_file_name(format!(".{file_name}.{}.tmp", std::process::id()))
    }

    fn read_error(&self, err: &impl std::fmt::Display) -> StoreError {
        StoreError::Read(format!("{}: {err}", self.path.display()))
    }

    fn write_error(&self, err: &impl std::fmt::Display) -> StoreError {
        StoreError::Write(format!("{}: {err}", self.path.display()))
    }

    async fn write_replace(&self, content: &str) -> std::io::Result<()> {
        let temp = self.temp_path();
        {
            let mut file = fs::File::create(&temp).await?;
            file.write_all(content.as_bytes()).await?;
            file.sync_all().await?;
        }
        if let Err(e) = fs::rename(&temp, &self.path).await {
            let _ = fs::remove_file(&temp).await;
            return Err(e);
        }
        Ok(())
    }
}

#[async_trait]
impl RecipeStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Recipe>, StoreError> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.read_error(&e))?;
        let recipes = codec::decode(&content).map_err(|e| match e {
            StoreError::Read(msg) => self.read_error(&msg),
            other => other,
        })?;
        tracing::trace!(path = %self.path.display(), count = recipes.len(), "Loaded recipes");
        Ok(recipes)
    }

    async fn save(&self, recipes: &[Recipe]) -> Result<(), StoreError> {
        let content = codec::encode(recipes)?;
        self.write_replace(&content)
            .await
            .map_err(|e| self.write_error(&e))?;
        tracing::trace!(path = %self.path.display(), count = recipes.len(), "Saved recipes");
        Ok(())
    }
}
