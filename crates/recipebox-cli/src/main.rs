//! CLI entry point - the composition root.
//!
//! Parses arguments, sets up logging and dispatches to handlers. Commands
//! that read or change recipes go through the bootstrapped `CliContext`.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use recipebox_cli::error::exit_code_for;
use recipebox_cli::{Cli, CliConfig, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = u8::try_from(exit_code_for(&e)).unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::resolve(cli.data_file.as_deref())?;

    // Paths and serve do their own setup; everything else needs the store
    match command {
        Commands::Paths => handlers::paths::execute(&config),
        Commands::Serve(args) => handlers::serve::execute(&config, args).await?,
        Commands::List => handlers::list::execute(&bootstrap(config).await?).await?,
        Commands::Show { id } => handlers::show::execute(&bootstrap(config).await?, id).await?,
        Commands::Search { term } => {
            handlers::search::execute(&bootstrap(config).await?, &term).await?;
        }
        Commands::Add(args) => {
            handlers::add::execute(&bootstrap(config).await?, args).await?;
        }
        Commands::Edit(args) => {
            handlers::edit::execute(&bootstrap(config).await?, args).await?;
        }
        Commands::Remove { id, force } => {
            handlers::remove::execute(&bootstrap(config).await?, id, force).await?;
        }
    }

    Ok(())
}
