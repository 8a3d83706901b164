//! `RecipeStore` implementations.
//!
//! The file path (or in-memory snapshot) is confined to this module and
//! never exposed through the port trait signatures.

mod json_file_store;
mod memory_store;

pub use json_file_store::JsonFileStore;
pub use memory_store::MemoryStore;
