//! In-memory implementation of the `RecipeStore` trait.

use async_trait::async_trait;
use tokio::sync::RwLock;

use recipebox_core::{Recipe, RecipeStore, StoreError};

use crate::codec;

/// Keeps the serialized collection in memory.
///
/// Holding the encoded text rather than a `Vec<Recipe>` means every load
/// and save pays the same parse/serialize cost as the file store, and a
/// malformed snapshot can be seeded with [`MemoryStore::from_raw`].
#[derive(Debug)]
pub struct MemoryStore {
    content: RwLock<String>,
}

impl MemoryStore {
    /// An empty collection.
    pub fn new() -> Self {
        Self::from_raw("[]")
    }

    /// A store preloaded with `recipes`.
    pub fn with_recipes(recipes: &[Recipe]) -> Result<Self, StoreError> {
        Ok(Self::from_raw(codec::encode(recipes)?))
    }

    /// A store whose snapshot is `content` verbatim, valid or not.
    pub fn from_raw(content: impl Into<String>) -> Self {
        Self {
            content: RwLock::new(content.into()),
        }
    }

    /// The current serialized snapshot.
    pub async fn raw(&self) -> String {
        self.content.read().await.clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn load(&self) -> Result<Vec<Recipe>, StoreError> {
        codec::decode(&self.content.read().await)
    }

    async fn save(&self, recipes: &[Recipe]) -> Result<(), StoreError> {
        let encoded = codec::encode(recipes)?;
        *self.content.write().await = encoded;
        Ok(())
    }
}
