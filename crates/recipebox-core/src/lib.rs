#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{DeletedRecipe, NewRecipe, Recipe, RecipeDraft, RecipePatch, ValidationError};
pub use paths::{
    DATA_FILE_ENV, DEFAULT_DATA_FILE_RELATIVE, DataFileResolution, DataFileSource, PathError,
    resolve_data_file,
};
pub use ports::{CoreError, RecipeStore, StoreError};
pub use services::RecipeService;
