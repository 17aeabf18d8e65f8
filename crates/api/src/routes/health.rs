use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Router};

use crate::state::AppState;

pub const SERVER_RUNNING: &str = "Server is running";
pub const DATABASE_UP: &str = "MySQL Database is up and running!";
pub const DATABASE_DOWN: &str = "MySQL Database is down!";

/// GET /health -- liveness only; never touches the store.
async fn health_check() -> &'static str {
    SERVER_RUNNING
}

/// GET /mysql-health -- acquire and release a pooled connection.
async fn store_health_check(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, DATABASE_UP),
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            (StatusCode::INTERNAL_SERVER_ERROR, DATABASE_DOWN)
        }
    }
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/mysql-health", get(store_health_check))
}
