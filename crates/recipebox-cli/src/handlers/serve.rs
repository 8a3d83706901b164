//! Serve command handler.

use anyhow::Result;
use recipebox_axum::{ServerConfig, start_server};

use crate::bootstrap::CliConfig;
use crate::commands::ServeArgs;

/// Execute the serve command.
///
/// Runs until Ctrl+C.
pub async fn execute(config: &CliConfig, args: ServeArgs) -> Result<()> {
    start_server(server_config(config, args)).await
}

fn server_config(config: &CliConfig, args: ServeArgs) -> ServerConfig {
    let mut server = ServerConfig::for_data_file(&config.data_file.path);
    server.host = args.host;
    server.port = args.port;
    server.api_prefix = args.api_prefix;

    if let Some(dir) = args.static_dir {
        server = server.with_static_dir(dir);
    }
    if !args.allow_origins.is_empty() {
        server = server.with_allowed_origins(args.allow_origins);
    }

    server
}
