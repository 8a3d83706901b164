//! Edit command handler.
//!
//! Applies only the fields given on the command line; everything else
//! keeps its stored value.

use anyhow::Result;
use recipebox_core::{Recipe, RecipeDraft};

use crate::bootstrap::CliContext;
use crate::commands::EditArgs;
use crate::error::CliError;

/// Execute the edit command.
pub async fn execute(ctx: &CliContext, args: EditArgs) -> Result<Recipe> {
    let id = args.id;
    let draft = draft_from(args);
    if draft == RecipeDraft::default() {
        return Err(CliError::Arguments(
            "nothing to change; pass at least one field option".to_string(),
        )
        .into());
    }

    let updated = ctx
        .recipes()
        .update(id, draft)
        .await
        .map_err(CliError::from)?;

    println!("Updated recipe {} ('{}').", updated.id, updated.name);
    Ok(updated)
}

fn draft_from(args: EditArgs) -> RecipeDraft {
    let image = if args.clear_image {
        Some(None)
    } else {
        args.image.map(Some)
    };

    RecipeDraft {
        name: args.name,
        ingredients: (!args.ingredients.is_empty()).then_some(args.ingredients),
        instructions: args.instructions,
        prep_time: args.prep_time,
        image,
    }
}
