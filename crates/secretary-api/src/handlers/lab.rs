//! Status and event handlers

use axum::{extract::State, http::StatusCode, Json};
use tracing::instrument;

use secretary_service::dto::{EventRequest, MessageResponse, StatusQuery};
use secretary_service::{StatusService, ToggleService};

use crate::extractors::{ApiQuery, ValidatedJson};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Current status of a user
///
/// GET /status?name=<username>
#[instrument(skip_all)]
pub async fn get_status(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<StatusQuery>,
) -> ApiResult<Json<MessageResponse>> {
    let username = query.name().ok_or(ApiError::MissingParameter("name"))?;

    let status = StatusService::new(state.service_context())
        .current_status(username)
        .await?;

    Ok(Json(MessageResponse::status(username, status)))
}

/// Toggle a user's status
///
/// POST /event
///
/// Answers 200 with an empty body once recording and notification have both
/// finished, whether or not they succeeded.
#[instrument(skip_all)]
pub async fn post_event(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<EventRequest>,
) -> ApiResult<StatusCode> {
    ToggleService::new(state.service_context())
        .toggle(&req.name)
        .await?;

    Ok(StatusCode::OK)
}
