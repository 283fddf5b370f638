//! Integration tests for the `config` CLI commands.
//!
//! These tests exercise the library functions that back each command,
//! using the public API from the user_registry crate.

use user_registry::config::{Config, LogFormat};
use user_registry::env::Env;

// ---------------------------------------------------------------------------
// config show
// ---------------------------------------------------------------------------

#[test]
fn show_reflects_local_file_and_env() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".user-registry.toml"),
        "[server]\nhost = \"0.0.0.0\"\n\n[logging]\nformat = \"text\"\n",
    )
    .unwrap();
    let env = Env::mock([("USER_REGISTRY_PORT", "8080")]);

    let config = Config::load(Some(dir.path()), &env).unwrap();
    let shown = config.to_toml().unwrap();

    assert!(shown.contains("host = \"0.0.0.0\""), "got:\n{shown}");
    assert!(shown.contains("port = 8080"), "got:\n{shown}");
    assert!(shown.contains("format = \"text\""), "got:\n{shown}");
}

#[test]
fn show_fails_on_broken_local_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".user-registry.toml"), "[server\nport = ").unwrap();

    let err = Config::load(Some(dir.path()), &Env::empty()).unwrap_err();
    assert!(err.to_string().contains(".user-registry.toml"), "got: {err}");
}

// ---------------------------------------------------------------------------
// config example
// ---------------------------------------------------------------------------

#[test]
fn example_is_loadable_config() {
    let example = Config::default().to_toml().unwrap();

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".user-registry.toml"), &example).unwrap();
    let loaded = Config::load(Some(dir.path()), &Env::empty()).unwrap();

    assert_eq!(loaded.server.port, 8000);
    assert_eq!(loaded.logging.format, LogFormat::Auto);
}

// ---------------------------------------------------------------------------
// config schema
// ---------------------------------------------------------------------------

#[test]
fn schema_is_valid_json_with_log_formats() {
    let schema = Config::json_schema().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&schema).unwrap();
    assert!(parsed.is_object());
    for format in ["text", "json", "auto"] {
        assert!(schema.contains(&format!("\"{format}\"")), "missing {format}");
    }
}
