//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, lab};
use crate::state::AppState;

/// Create the router with every endpoint
pub fn create_router() -> Router<AppState> {
    Router::new().merge(lab_routes()).merge(health_routes())
}

/// Status and event routes
fn lab_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(lab::get_status))
        .route("/event", post(lab::post_event))
}

/// Liveness and readiness probes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(health::ping))
        .route("/health/ready", get(health::readiness_check))
}
