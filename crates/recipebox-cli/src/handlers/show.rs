//! Show command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_recipe;

/// Execute the show command.
pub async fn execute(ctx: &CliContext, id: i64) -> Result<()> {
    let recipe = ctx.recipes().get(id).await.map_err(CliError::from)?;
    display_recipe(&recipe);
    Ok(())
}
