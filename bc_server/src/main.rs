//! Group bulls and cows bot server.
//!
//! One session actor per chat, created on `/newgame` and removed when the
//! game is won or ended.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Error};
use bc_server::{
    api::{self, AppState},
    config::ServerConfig,
    logging,
};
use bulls_cows::{SessionManager, VERSION};
use log::info;
use pico_args::Arguments;

const HELP: &str = "\
Run the group bulls and cows bot server

USAGE:
  bc_server [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address  [default: env SERVER_BIND, env PORT or 0.0.0.0:5000]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:8080)
  PORT                     Port to listen on when SERVER_BIND is unset
  SECRET_LENGTH            Digits in each secret  [default: 4]
  SESSION_INBOX_CAPACITY   Queued commands per session  [default: 32]
  RUST_LOG                 Log filter  [default: info]
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let bind_override: Option<SocketAddr> = pargs
        .opt_value_from_str("--bind")
        .context("Invalid --bind address")?;

    logging::init();

    let config = ServerConfig::from_env(bind_override)?;
    config.validate()?;

    info!(
        "Starting bulls and cows server {VERSION} at {} ({}-digit secrets)",
        config.bind, config.session.secret_length
    );

    let state = AppState {
        session_manager: Arc::new(SessionManager::new(config.session)),
    };
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;

    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
}
