use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::domain::StatusCheck;
use crate::presentation::state::AppState;

use super::api_types::{ErrorResponse, StatusCheckCreate, StatusCheckResponse, StatusListQuery};

#[tracing::instrument(skip(state, request), fields(client_name = %request.client_name))]
pub async fn create_status_handler(
    State(state): State<AppState>,
    Json(request): Json<StatusCheckCreate>,
) -> impl IntoResponse {
    let check = StatusCheck::new(request.client_name);

    match state.status_repository.insert(&check).await {
        Ok(()) => (StatusCode::OK, Json(StatusCheckResponse::from(check))).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to record status check");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to record status check: {}", e),
                }),
            )
                .into_response()
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn list_status_handler(
    State(state): State<AppState>,
    Query(query): Query<StatusListQuery>,
) -> impl IntoResponse {
    match state.status_repository.list(query.skip, query.limit).await {
        Ok(checks) => {
            let body: Vec<StatusCheckResponse> =
                checks.into_iter().map(StatusCheckResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to list status checks");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to list status checks: {}", e),
                }),
            )
                .into_response()
        }
    }
}
