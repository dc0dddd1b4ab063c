//! CLI command implementations

use std::io::{self, Write};
use std::path::Path;

use crate::config::ServiceConfig;
use crate::http_server::HttpServer;
use crate::observability::init_logging;

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Start { config, host, port } => start(config.as_deref(), host, port),
        Command::Config { config } => show_config(config.as_deref(), &mut io::stdout()),
    }
}

/// Resolve the configuration file and apply command-line overrides
pub fn resolve_config(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<ServiceConfig> {
    let mut config = ServiceConfig::load_or_default(config_path)?;

    if let Some(host) = host {
        config.http.host = host;
    }
    if let Some(port) = port {
        config.http.port = port;
    }

    config.validate()?;
    Ok(config)
}

/// Start the HTTP server and block until it stops
pub fn start(config_path: Option<&Path>, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let config = resolve_config(config_path, host, port)?;

    init_logging(&config.log);
    tracing::info!(
        addr = %config.http.socket_addr(),
        log_format = %config.log.format,
        "starting inventory API"
    );

    let server = HttpServer::with_config(config.http);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::server_error(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::server_error(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Write the effective configuration as pretty JSON
pub fn show_config<W: Write>(config_path: Option<&Path>, out: &mut W) -> CliResult<()> {
    let config = resolve_config(config_path, None, None)?;
    let json = serde_json::to_string_pretty(&config)?;
    writeln!(out, "{}", json)?;
    Ok(())
}
