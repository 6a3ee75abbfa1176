//! HTTP API for the bulls and cows bot.
//!
//! A chat platform (or a thin relay in front of it) forwards every bot
//! command as a JSON payload. The server runs the command against the
//! chat's game session and answers with the text to post back.
//!
//! # Modules
//!
//! - [`commands`]: The command webhook
//! - [`request_id`]: Request correlation ids for logs
//!
//! # Endpoints
//!
//! ```text
//! GET  /health                                   - Health check
//! POST /api/v1/sessions/{session_key}/commands   - Run one chat command
//! ```
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use bc_server::api::{AppState, create_router};
//! use bulls_cows::SessionManager;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = AppState {
//!     session_manager: Arc::new(SessionManager::default()),
//! };
//!
//! let app = create_router(state);
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod request_id;

use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use bulls_cows::{SessionManager, VERSION};
use serde_json::json;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub session_manager: Arc<SessionManager>,
}

/// Create the complete API router with all endpoints and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", create_v1_router())
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .with_state(state)
}

fn create_v1_router() -> Router<AppState> {
    Router::new().route(
        "/sessions/{session_key}/commands",
        post(commands::handle_command),
    )
}

/// Health check endpoint for monitoring and load balancers.
///
/// ```bash
/// curl http://localhost:5000/health
/// # {"status":"healthy","version":"v2.0.0-group","sessions":3}
/// ```
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let sessions = state.session_manager.active_session_count().await;

    Json(json!({
        "status": "healthy",
        "version": VERSION,
        "sessions": sessions,
    }))
}
