use axum::Json;
use axum::extract::State;

use crate::application::services::speech_error_message;
use crate::presentation::state::AppState;

use super::api_types::{TtsRequest, TtsResponse};

#[tracing::instrument(skip(state, request))]
pub async fn tts_handler(
    State(state): State<AppState>,
    Json(request): Json<TtsRequest>,
) -> Json<TtsResponse> {
    match state.speech_service.synthesize(&request.text).await {
        Ok(audio) => Json(TtsResponse::audio(audio)),
        Err(e) => Json(TtsResponse::error(speech_error_message(&e, state.catalog))),
    }
}
