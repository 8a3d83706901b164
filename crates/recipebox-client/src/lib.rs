#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultRecipeClient, RecipeClient};

// Configuration
pub use config::ClientConfig;

// Errors
pub use error::{ClientError, ClientResult};

// Used by the integration tests only
#[cfg(test)]
use axum as _;
#[cfg(test)]
use recipebox_axum as _;
#[cfg(test)]
use recipebox_store as _;
