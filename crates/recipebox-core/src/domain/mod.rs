//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (files, HTTP, etc.).
//!
//! # Structure
//!
//! - `recipe` - Persisted recipe types (`Recipe`, `NewRecipe`, `DeletedRecipe`)
//! - `draft` - Unvalidated request bodies and their validation
//! - `collection` - Helpers over the whole recipe collection

pub mod collection;
mod draft;
mod recipe;

pub use draft::{RecipeDraft, RecipePatch, ValidationError};
pub use recipe::{DeletedRecipe, NewRecipe, Recipe};
