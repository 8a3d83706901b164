#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod codec;
pub mod factory;
pub mod setup;
pub mod stores;

// Re-export factory for convenient access
pub use factory::StoreFactory;

// Re-export store implementations
pub use stores::{JsonFileStore, MemoryStore};

// Re-export setup functions for convenient access
pub use setup::setup_data_file;
