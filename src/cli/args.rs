//! CLI argument definitions using clap
//!
//! Commands:
//! - inventory-api start [--config <path>] [--host <host>] [--port <port>]
//! - inventory-api config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// In-memory inventory management HTTP service
#[derive(Parser, Debug)]
#[command(name = "inventory-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Start {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind, overrides the config file
        #[arg(long)]
        host: Option<String>,

        /// Port to bind, overrides the config file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the effective configuration and exit
    Config {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
