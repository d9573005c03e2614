use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::domain::Source;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::api_types::{ChatRequest, ChatResponse, ErrorResponse};

/// Answers with 200 on every path past validation; failures travel as a
/// localized message in `response`.
#[tracing::instrument(
    skip(state, request),
    fields(sources = request.sources.len(), has_session = request.session_id.is_some())
)]
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    if request.question.trim().is_empty() {
        tracing::warn!("Chat request with empty question");
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: "question must not be empty".to_string(),
            }),
        )
            .into_response();
    }

    tracing::debug!(question = %sanitize_prompt(&request.question), "Processing chat request");

    let sources: Vec<Source> = request.sources.into_iter().map(Source::from).collect();
    let body = match state
        .chat_service
        .dispatch(&request.question, &sources, request.session_id)
        .await
    {
        Ok(answer) => ChatResponse {
            response: answer.response,
            session_id: answer.session_id.into_string(),
        },
        Err(failure) => ChatResponse {
            response: failure.user_message(state.catalog).to_string(),
            session_id: failure.session_id.into_string(),
        },
    };

    (StatusCode::OK, Json(body)).into_response()
}
