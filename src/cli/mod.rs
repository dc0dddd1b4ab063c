//! CLI module for the inventory service
//!
//! Provides command-line interface for:
//! - start: Load configuration and serve the HTTP API
//! - config: Print the effective configuration

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{resolve_config, run, run_command, show_config, start};
pub use errors::{CliError, CliErrorCode, CliResult};
