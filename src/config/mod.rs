//! Configuration loading and layering.
//!
//! Handles `.user-registry.toml` loading, environment variable resolution,
//! and CLI flag merging with proper priority ordering.

pub mod loader;

pub use loader::{Config, ConfigError, LogFormat, LoggingConfig, ServerConfig};
