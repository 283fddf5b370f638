//! user-registry — in-memory user registry HTTP service (library crate).
//!
//! Re-exports public modules for integration tests and the binary.

pub mod config;
pub mod constants;
pub mod env;
pub mod logging;
pub mod models;
pub mod registry;
pub mod server;
pub mod validation;
pub mod views;
