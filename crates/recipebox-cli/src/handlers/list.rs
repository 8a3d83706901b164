//! List command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_recipe_table;

/// Execute the list command.
///
/// Prints every recipe in collection order.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let recipes = ctx.recipes().list().await.map_err(CliError::from)?;

    if recipes.is_empty() {
        println!("No recipes found.");
        println!("Use 'recipebox add <name>' to add your first recipe.");
        return Ok(());
    }

    println!("Found {} recipe(s):\n", recipes.len());
    print_recipe_table(&recipes);

    Ok(())
}
