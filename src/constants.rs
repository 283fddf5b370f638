//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and server defaults so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "user-registry";

/// Crate version, as declared in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compilation target triple, injected by `build.rs`.
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.user-registry.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".user-registry.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "user-registry";

/// Default bind host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default tracing filter when neither `RUST_LOG` nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_HOST: &str = "USER_REGISTRY_HOST";
pub const ENV_PORT: &str = "USER_REGISTRY_PORT";
pub const ENV_LOG: &str = "USER_REGISTRY_LOG";
pub const ENV_LOG_FORMAT: &str = "USER_REGISTRY_LOG_FORMAT";
