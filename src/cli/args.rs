//! Clap argument types and config overrides.

use clap::Parser;
use std::path::PathBuf;

use user_registry::config::{Config, LogFormat};

/// In-memory user registry HTTP service.
#[derive(Parser, Debug)]
#[command(
    name = "user-registry",
    version = user_registry::constants::VERSION,
    about = super::ABOUT_STYLED,
)]
pub struct Cli {
    /// Directory to read `.user-registry.toml` from (default: current directory).
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server.
    Serve(ServeArgs),

    /// Inspect configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print version and build information.
    Version,
}

/// Configuration subcommands.
#[derive(clap::Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML.
    Show,
    /// Print the built-in defaults as TOML.
    Example,
    /// Print the JSON Schema of the config file.
    Schema,
}

/// Arguments for the `serve` subcommand.
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Host name or IP address to bind.
    #[arg(long)]
    pub host: Option<String>,

    /// TCP port to bind.
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Log filter directive (e.g. `info`, `user_registry=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log line format.
    #[arg(long)]
    pub log_format: Option<LogFormat>,
}

impl ServeArgs {
    /// Apply flags on top of the loaded config (layer 1).
    pub fn apply(&self, config: &mut Config) {
        if let Some(ref host) = self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(ref level) = self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }
    }
}
