//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins over the configured level. Output is either the
//! human-readable `fmt` layer or flattened JSON for log aggregation.

use std::io::IsTerminal;

use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};
use crate::env::Env;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("invalid log filter '{directive}': {reason}")]
    InvalidFilter { directive: String, reason: String },

    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Install the global subscriber.
pub fn init(config: &LoggingConfig, env: &Env) -> Result<(), LoggingError> {
    let filter = build_filter(config, env)?;

    let result = if use_json(config.format, std::io::stdout().is_terminal()) {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().flatten_event(true).with_current_span(false))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .try_init()
    };

    result.map_err(|_| LoggingError::AlreadyInitialized)
}

/// Build the event filter from `RUST_LOG`, falling back to `config.level`.
pub fn build_filter(config: &LoggingConfig, env: &Env) -> Result<EnvFilter, LoggingError> {
    let directive = env
        .var(EnvFilter::DEFAULT_ENV)
        .unwrap_or_else(|| config.level.clone());

    EnvFilter::try_new(&directive).map_err(|e| LoggingError::InvalidFilter {
        directive,
        reason: e.to_string(),
    })
}

/// Whether to emit JSON lines for the given format.
pub fn use_json(format: LogFormat, stdout_is_terminal: bool) -> bool {
    match format {
        LogFormat::Json => true,
        LogFormat::Text => false,
        LogFormat::Auto => !stdout_is_terminal,
    }
}
