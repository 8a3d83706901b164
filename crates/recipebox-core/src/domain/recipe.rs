//! Recipe domain types.

use serde::{Deserialize, Serialize};

/// A recipe that exists in the collection with an assigned ID.
///
/// Serialized with camelCase keys (`prepTime`), which is both the on-disk
/// layout and the HTTP wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique ID, assigned on creation and never changed afterwards.
    pub id: i64,
    /// Display name of the dish.
    pub name: String,
    /// Ingredient lines in display order.
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Free-text preparation instructions.
    #[serde(default)]
    pub instructions: String,
    /// Preparation time in minutes.
    #[serde(default)]
    pub prep_time: u32,
    /// Optional image URL. Absent means the frontend shows a placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A validated recipe that has not been persisted yet (no ID).
///
/// Produced by [`RecipeDraft::into_new_recipe`](super::RecipeDraft::into_new_recipe).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub prep_time: u32,
    pub image: Option<String>,
}

impl NewRecipe {
    /// Create a new recipe with only a name; everything else is empty.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: Vec::new(),
            instructions: String::new(),
            prep_time: 0,
            image: None,
        }
    }

    /// Attach an ID, producing a persistable recipe.
    #[must_use]
    pub fn with_id(self, id: i64) -> Recipe {
        Recipe {
            id,
            name: self.name,
            ingredients: self.ingredients,
            instructions: self.instructions,
            prep_time: self.prep_time,
            image: self.image,
        }
    }
}

/// Confirmation returned after a recipe has been deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedRecipe {
    /// Human-readable confirmation.
    pub message: String,
    /// The recipe as it was before removal.
    pub recipe: Recipe,
}

impl DeletedRecipe {
    pub(crate) fn new(recipe: Recipe) -> Self {
        Self {
            message: format!("Recipe {} deleted", recipe.id),
            recipe,
        }
    }
}
