//! JSON encoding of the recipe collection.
//!
//! The on-disk layout is a single JSON array of recipes, pretty-printed
//! with two-space indentation.

use recipebox_core::domain::collection::find_duplicate_id;
use recipebox_core::{Recipe, StoreError};

/// Parse a serialized collection.
///
/// Fails with [`StoreError::Read`] on malformed JSON, on anything other than
/// an array of recipes, and on duplicate IDs.
pub fn decode(content: &str) -> Result<Vec<Recipe>, StoreError> {
    let recipes: Vec<Recipe> =
        serde_json::from_str(content).map_err(|e| StoreError::Read(e.to_string()))?;

    if let Some(id) = find_duplicate_id(&recipes) {
        return Err(StoreError::Read(format!("duplicate recipe id {id}")));
    }

    Ok(recipes)
}

/// Serialize a collection for storage.
pub fn encode(recipes: &[Recipe]) -> Result<String, StoreError> {
    serde_json::to_string_pretty(recipes).map_err(|e| StoreError::Write(e.to_string()))
}
