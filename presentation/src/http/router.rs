//! Status API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/status`.

use super::handlers;
use super::state::AppState;
use axum::Router;
use axum::routing::{get, post};

/// Build the status API router.
pub fn status_router(state: AppState) -> Router {
    let status = Router::new()
        .route("/questions", get(handlers::questions))
        .route("/submit", post(handlers::submit))
        .with_state(state);

    Router::new().nest("/api/status", status)
}
