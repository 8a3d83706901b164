//! Request drafts and their validation.
//!
//! A [`RecipeDraft`] is whatever the caller sent: every field optional,
//! nothing checked. Validation turns it into a [`NewRecipe`] (for create)
//! or a [`RecipePatch`] (for update) before anything reaches the store.

use serde::{Deserialize, Deserializer, Serialize};

use super::recipe::{NewRecipe, Recipe};

/// Unvalidated recipe fields as received from a client.
///
/// `prep_time` is signed so that negative values surface as a
/// [`ValidationError`] rather than a JSON decoding failure.
///
/// `image` distinguishes three states:
/// - `None` = field absent, leave unchanged
/// - `Some(None)` = explicit `null`, clear the image
/// - `Some(Some(url))` = set the image
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<i64>,
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<Option<String>>,
}

/// Maps a present field (including `null`) to `Some`, so that `#[serde(default)]`
/// is the only way to get `None`.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Validated partial update for an existing recipe.
///
/// Only `Some` fields are applied; the ID is never touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipePatch {
    pub name: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<String>,
    pub prep_time: Option<u32>,
    pub image: Option<Option<String>>,
}

impl RecipePatch {
    /// Apply the supplied fields to `recipe` in place.
    pub fn apply(self, recipe: &mut Recipe) {
        if let Some(name) = self.name {
            recipe.name = name;
        }
        if let Some(ingredients) = self.ingredients {
            recipe.ingredients = ingredients;
        }
        if let Some(instructions) = self.instructions {
            recipe.instructions = instructions;
        }
        if let Some(prep_time) = self.prep_time {
            recipe.prep_time = prep_time;
        }
        if let Some(image) = self.image {
            recipe.image = image;
        }
    }

    /// True when the patch would change nothing.
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.ingredients.is_none()
            && self.instructions.is_none()
            && self.prep_time.is_none()
            && self.image.is_none()
    }
}

/// Recipe validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Recipe name is required")]
    MissingName,

    #[error("Recipe name cannot be empty")]
    EmptyName,

    #[error("Preparation time cannot be negative, got {0}")]
    NegativePrepTime(i64),

    #[error("Preparation time is too large, got {0}")]
    PrepTimeTooLarge(i64),
}

impl RecipeDraft {
    /// Create a draft carrying only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Validate this draft for creation.
    ///
    /// A non-empty name is required; all other fields fall back to empty
    /// values.
    pub fn into_new_recipe(self) -> Result<NewRecipe, ValidationError> {
        let name = validate_name(self.name.ok_or(ValidationError::MissingName)?)?;
        let prep_time = self.prep_time.map(validate_prep_time).transpose()?;

        Ok(NewRecipe {
            name,
            ingredients: self.ingredients.map(clean_ingredients).unwrap_or_default(),
            instructions: self.instructions.unwrap_or_default(),
            prep_time: prep_time.unwrap_or(0),
            image: self.image.flatten().and_then(clean_image),
        })
    }

    /// Validate this draft as a partial update.
    ///
    /// Absent fields stay absent; supplied fields get the same checks as
    /// on creation.
    pub fn into_patch(self) -> Result<RecipePatch, ValidationError> {
        Ok(RecipePatch {
            name: self.name.map(validate_name).transpose()?,
            ingredients: self.ingredients.map(clean_ingredients),
            instructions: self.instructions,
            prep_time: self.prep_time.map(validate_prep_time).transpose()?,
            image: self.image.map(|image| image.and_then(clean_image)),
        })
    }
}

fn validate_name(name: String) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

fn validate_prep_time(minutes: i64) -> Result<u32, ValidationError> {
    if minutes < 0 {
        return Err(ValidationError::NegativePrepTime(minutes));
    }
    u32::try_from(minutes).map_err(|_| ValidationError::PrepTimeTooLarge(minutes))
}

// Blank lines come from trailing newlines in textarea input.
fn clean_ingredients(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

fn clean_image(image: String) -> Option<String> {
    let trimmed = image.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
