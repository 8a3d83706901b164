//! User input utilities for interactive command-line prompts.

use std::io::{self, Write};

use anyhow::{Context, Result};

/// Prompts the user for a yes/no confirmation.
///
/// Only `y` or `yes` (any case) count as yes; everything else, including
/// an empty line, is no.
pub fn prompt_confirmation(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N]: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read user input")?;

    Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
