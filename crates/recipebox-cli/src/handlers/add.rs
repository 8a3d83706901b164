//! Add command handler.

use anyhow::Result;
use recipebox_core::{Recipe, RecipeDraft};

use crate::bootstrap::CliContext;
use crate::commands::AddArgs;
use crate::error::CliError;

/// Execute the add command.
///
/// Returns the created recipe so callers can report or chain on it.
pub async fn execute(ctx: &CliContext, args: AddArgs) -> Result<Recipe> {
    let created = ctx
        .recipes()
        .create(draft_from(args))
        .await
        .map_err(CliError::from)?;

    println!("Added recipe '{}' with ID {}.", created.name, created.id);
    Ok(created)
}

fn draft_from(args: AddArgs) -> RecipeDraft {
    RecipeDraft {
        name: Some(args.name),
        ingredients: Some(args.ingredients),
        instructions: args.instructions,
        prep_time: args.prep_time,
        image: args.image.map(Some),
    }
}
