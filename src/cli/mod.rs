//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use std::io::IsTerminal;
use std::net::SocketAddr;

/// About text with ANSI styling for clap help output.
pub const ABOUT_STYLED: &str =
    "\x1b[1muser-registry\x1b[0m \x1b[2m· In-memory user registry with HTML views.\x1b[0m";

/// Print the startup banner to stderr when it is a terminal.
pub fn print_banner(addr: SocketAddr) {
    use colored::Colorize;
    use std::io::Write;

    if !std::io::stderr().is_terminal() {
        return;
    }

    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = writeln!(handle);
    let _ = writeln!(
        handle,
        "  {} {}  {}",
        "user-registry".bold(),
        user_registry::constants::VERSION.green(),
        format!("· http://{addr}/").dimmed(),
    );
    let _ = writeln!(handle);
    let _ = handle.flush();
}
