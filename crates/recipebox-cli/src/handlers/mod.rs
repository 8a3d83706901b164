//! Command handlers that delegate to the recipe service.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Turn CLI arguments into service input
//!   2. Call `RecipeService` methods
//!   3. Format output for the terminal
//!
//! Service errors are converted to [`CliError`](crate::CliError) so `main`
//! can pick the exit code.

pub mod add;
pub mod edit;
pub mod list;
pub mod paths;
pub mod remove;
pub mod search;
pub mod serve;
pub mod show;
