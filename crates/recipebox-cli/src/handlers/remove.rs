//! Remove command handler.

use anyhow::Result;
use recipebox_core::DeletedRecipe;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_recipe;
use crate::utils::input;

/// Execute the remove command.
///
/// Shows the recipe and asks for confirmation unless `force` is set.
/// Returns `None` when the user cancels.
pub async fn execute(ctx: &CliContext, id: i64, force: bool) -> Result<Option<DeletedRecipe>> {
    if !force {
        let recipe = ctx.recipes().get(id).await.map_err(CliError::from)?;
        display_recipe(&recipe);
        println!();

        if !input::prompt_confirmation("Are you sure you want to remove this recipe?")? {
            println!("Remove operation cancelled.");
            return Ok(None);
        }
    }

    let deleted = ctx.recipes().delete(id).await.map_err(CliError::from)?;
    println!("{}", deleted.message);

    Ok(Some(deleted))
}
