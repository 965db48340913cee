// Application state module
// Shared, read-only runtime state handed to every connection

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tokio::sync::Notify;

use super::types::Config;

/// Application state
pub struct AppState {
    pub config: Config,

    /// Shutdown signal, notified by the signal handler
    pub shutdown: Arc<Notify>,

    // Cached config value for fast access without locks
    pub cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let cached_access_log = AtomicBool::new(config.logging.access_log);

        Self {
            config,
            shutdown: Arc::new(Notify::new()),
            cached_access_log,
        }
    }
}
