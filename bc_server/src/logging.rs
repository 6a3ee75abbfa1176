//! Structured logging configuration.
//!
//! Installs a `tracing` subscriber that also receives `log` records emitted by
//! the game engine, so session and actor events share one output stream.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,hyper=warn";

/// Initialize structured logging
///
/// Log levels are configurable via the `RUST_LOG` env var.
///
/// # Example
///
/// ```no_run
/// use bc_server::logging;
///
/// #[tokio::main]
/// async fn main() {
///     logging::init();
///     tracing::info!("Server starting");
/// }
/// ```
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(true);

    // try_init: a second call (tests, embedding) must not panic
    if tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
    {
        tracing::info!("Structured logging initialized");
    }
}

/// Log one handled chat command
///
/// # Arguments
///
/// * `session_key` - Chat the command arrived in
/// * `player_id` - Sender of the command
/// * `command` - Raw command name
/// * `ok` - Whether the command succeeded
pub fn log_command(session_key: i64, player_id: i64, command: &str, ok: bool) {
    if ok {
        tracing::info!(session_key, player_id, command, "Command handled");
    } else {
        tracing::debug!(session_key, player_id, command, "Command rejected");
    }
}
