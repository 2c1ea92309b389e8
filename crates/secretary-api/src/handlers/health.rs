//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use secretary_service::dto::{MessageResponse, ReadinessResponse};
use tracing::warn;

use crate::state::AppState;

/// Liveness probe
///
/// GET /ping
pub async fn ping() -> Json<MessageResponse> {
    Json(MessageResponse::pong())
}

/// Readiness check with database health
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let db_healthy = match state.service_context().event_repo().health_check().await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "Database health check failed");
            false
        }
    };

    let response = ReadinessResponse::from_database(db_healthy);
    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
