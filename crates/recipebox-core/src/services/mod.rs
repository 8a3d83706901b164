//! Core services that orchestrate domain operations.
//!
//! Services depend only on ports, never on concrete adapters.

mod recipe_service;

pub use recipe_service::RecipeService;
