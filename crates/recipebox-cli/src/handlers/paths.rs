//! Paths command handler.
//!
//! Displays the resolved data file for diagnostics.

use crate::bootstrap::CliConfig;

/// Execute the paths command.
///
/// Prints `key = value` lines. Does not create the data file.
pub fn execute(config: &CliConfig) {
    let data_file = &config.data_file;
    println!("data_file = {}", data_file.path.display());
    println!("data_file_source = {}", data_file.source.label());
    println!("data_file_exists = {}", data_file.path.exists());
}
