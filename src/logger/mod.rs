//! Logger module
//!
//! Logging utilities for the HTTP server: lifecycle messages to stdout,
//! errors and warnings to stderr, and formatted per-request access logs.

mod format;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("Server is running on http://{addr}");
    println!("  - Static root: {}", config.static_files.root);
    println!(
        "  - Access log: {} ({})",
        if config.logging.access_log { "on" } else { "off" },
        config.logging.access_log_format
    );
    if let Some(workers) = config.server.workers {
        println!("  - Worker threads: {workers}");
    }
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    println!("{}", entry.format(format));
}

pub fn log_shutdown() {
    println!("Server stopped");
}
