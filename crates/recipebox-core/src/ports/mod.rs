//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No filesystem types in any signature
//! - The store is load/save of the whole collection, nothing finer

pub mod recipe_store;

use thiserror::Error;

pub use recipe_store::RecipeStore;

#[cfg(test)]
pub use recipe_store::MockRecipeStore;

use crate::domain::ValidationError;

/// Errors raised by a [`RecipeStore`] implementation.
///
/// This error type abstracts away storage implementation details (I/O and
/// JSON errors) and keeps the message for the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The collection could not be read or parsed.
    #[error("Failed to read recipes: {0}")]
    Read(String),

    /// The collection could not be serialized or written.
    #[error("Failed to write recipes: {0}")]
    Write(String),
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters should map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Validation error (invalid input).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No recipe with the requested ID.
    #[error("Recipe {id} not found")]
    NotFound { id: i64 },

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}
