// Server module entry point
// Binds the listening socket and runs the accept loop until shutdown

pub mod connection;
pub mod listener;
pub mod signal;

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use crate::config::{AppState, Config};
use crate::logger;

pub use listener::bind;

/// Bind the configured address and serve requests until a shutdown signal.
///
/// A bind failure (port in use, insufficient privileges) propagates out and
/// the process exits with a non-zero status.
pub async fn run(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = listener::bind(addr)?;
    let bound_addr = listener.local_addr()?;

    let state = Arc::new(AppState::new(cfg));
    let active_connections = Arc::new(AtomicUsize::new(0));

    logger::log_server_start(&bound_addr, &state.config);

    signal::start_signal_handler(Arc::clone(&state.shutdown));

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::accept_connection(
                            stream,
                            peer_addr,
                            &state,
                            &active_connections,
                        );
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = state.shutdown.notified() => {
                logger::log_shutdown();
                break;
            }
        }
    }

    Ok(())
}
