//! Search command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_recipe_table;

/// Execute the search command.
///
/// Matches are case-insensitive substrings of the recipe name. No match is
/// not an error.
pub async fn execute(ctx: &CliContext, term: &str) -> Result<()> {
    let recipes = ctx.recipes().search(term).await.map_err(CliError::from)?;

    if recipes.is_empty() {
        println!("No recipes match '{term}'.");
        return Ok(());
    }

    println!("Found {} recipe(s) matching '{term}':\n", recipes.len());
    print_recipe_table(&recipes);

    Ok(())
}
