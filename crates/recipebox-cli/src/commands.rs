//! Main commands enum and per-command argument structs.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use recipebox_axum::bootstrap::{DEFAULT_API_PREFIX, DEFAULT_PORT};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(ServeArgs),

    /// List every recipe
    List,

    /// Show one recipe in full
    Show {
        /// Recipe ID
        id: i64,
    },

    /// Find recipes whose name contains a term (case-insensitive)
    Search {
        /// Text to look for in recipe names
        term: String,
    },

    /// Add a new recipe
    Add(AddArgs),

    /// Change fields of an existing recipe
    Edit(EditArgs),

    /// Remove a recipe
    Remove {
        /// Recipe ID
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show the resolved data file path
    Paths,
}

/// Arguments for `recipebox serve`.
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, env = "RECIPEBOX_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "RECIPEBOX_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Path prefix for the recipe routes (`/` mounts them at the root)
    #[arg(long, default_value = DEFAULT_API_PREFIX)]
    pub api_prefix: String,

    /// Directory with frontend assets to serve for non-API paths
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// Allowed CORS origin (repeatable; all origins are allowed when omitted)
    #[arg(long = "allow-origin")]
    pub allow_origins: Vec<String>,
}

/// Arguments for `recipebox add`.
#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Recipe name
    pub name: String,

    /// Ingredient line (repeat for each ingredient, in display order)
    #[arg(short, long = "ingredient")]
    pub ingredients: Vec<String>,

    /// Preparation instructions
    #[arg(long)]
    pub instructions: Option<String>,

    /// Preparation time in minutes
    #[arg(long, allow_negative_numbers = true)]
    pub prep_time: Option<i64>,

    /// Image URL
    #[arg(long)]
    pub image: Option<String>,
}

/// Arguments for `recipebox edit`.
///
/// Only the options given are changed.
#[derive(Args, Debug, Clone)]
pub struct EditArgs {
    /// Recipe ID
    pub id: i64,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// Replacement ingredient list (repeat for each ingredient)
    #[arg(short, long = "ingredient")]
    pub ingredients: Vec<String>,

    /// New instructions
    #[arg(long)]
    pub instructions: Option<String>,

    /// New preparation time in minutes
    #[arg(long, allow_negative_numbers = true)]
    pub prep_time: Option<i64>,

    /// New image URL
    #[arg(long, conflicts_with = "clear_image")]
    pub image: Option<String>,

    /// Remove the image
    #[arg(long)]
    pub clear_image: bool,
}

#[cfg(test)]
mod tests {
    use crate::parser::Cli;
    use clap::Parser;

    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::parse_from(["recipebox", "serve"]);
        let Some(Commands::Serve(args)) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.port, 3000);
        assert_eq!(args.api_prefix, "/api");
        assert!(args.static_dir.is_none());
        assert!(args.allow_origins.is_empty());
    }

    #[test]
    fn test_serve_origins_repeat() {
        let cli = Cli::parse_from([
            "recipebox",
            "serve",
            "--port",
            "8080",
            "--allow-origin",
            "http://a.test",
            "--allow-origin",
            "http://b.test",
        ]);
        let Some(Commands::Serve(args)) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.port, 8080);
        assert_eq!(args.allow_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_add_collects_ingredients_in_order() {
        let cli = Cli::parse_from([
            "recipebox",
            "add",
            "Pancakes",
            "-i",
            "flour",
            "--ingredient",
            "milk",
            "--prep-time",
            "15",
        ]);
        let Some(Commands::Add(args)) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.name, "Pancakes");
        assert_eq!(args.ingredients, vec!["flour", "milk"]);
        assert_eq!(args.prep_time, Some(15));
    }

    #[test]
    fn test_negative_prep_time_parses() {
        let cli = Cli::parse_from(["recipebox", "add", "Soup", "--prep-time", "-5"]);
        let Some(Commands::Add(args)) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.prep_time, Some(-5));
    }

    #[test]
    fn test_edit_image_conflicts_with_clear() {
        let result = Cli::try_parse_from([
            "recipebox",
            "edit",
            "1",
            "--image",
            "a.png",
            "--clear-image",
        ]);
        assert!(result.is_err());
    }
}
