//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no domain transforms.

pub mod recipe_display;
pub mod tables;

// Re-export commonly used items
pub use recipe_display::{display_recipe, print_recipe_table};
pub use tables::{format_optional, print_separator, truncate_string};
