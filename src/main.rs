//! user-registry — in-memory user registry HTTP service.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use user_registry::config;
use user_registry::constants;
use user_registry::env;
use user_registry::logging;
use user_registry::registry;
use user_registry::server;

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Command, ConfigAction, ServeArgs};
use config::Config;
use env::Env;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let dir = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to determine current directory")?,
    };

    match cli.command {
        Command::Serve(args) => run_serve(args, dir).await,
        Command::Config { action } => run_config(action, dir),
        Command::Version => run_version(),
    }
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

/// Print configuration information.
fn run_config(action: ConfigAction, dir: PathBuf) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load(Some(dir.as_path()), &Env::real())
                .context("failed to load configuration")?;
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Example => {
            print!("{}", Config::default().to_toml()?);
        }
        ConfigAction::Schema => {
            println!("{}", Config::json_schema()?);
        }
    }
    Ok(())
}

/// Load config, start logging, and serve until shutdown.
async fn run_serve(args: ServeArgs, dir: PathBuf) -> Result<()> {
    let env = Env::real();
    let mut config = Config::load(Some(dir.as_path()), &env).context("failed to load configuration")?;
    args.apply(&mut config);

    logging::init(&config.logging, &env).context("failed to initialise logging")?;

    let addr = config
        .socket_addr()
        .context("failed to resolve listen address")?;

    tracing::info!(
        version = constants::VERSION,
        addr = %addr,
        log_format = %config.logging.format,
        "starting {}",
        constants::APP_NAME
    );
    cli::print_banner(addr);

    let registry = registry::SharedRegistry::new();
    server::serve(addr, registry)
        .await
        .context("server failed")?;

    Ok(())
}
