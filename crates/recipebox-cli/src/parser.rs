//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the recipe catalog.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "recipebox")]
#[command(about = "Manage a JSON-backed recipe catalog and serve it over HTTP")]
#[command(version)]
pub struct Cli {
    /// Recipe collection file (defaults to $RECIPEBOX_DATA_FILE, then ./data/recipes.json)
    #[arg(long = "data-file", global = true)]
    pub data_file: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Default log filter directive when `RUST_LOG` is not set.
    pub const fn default_log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
