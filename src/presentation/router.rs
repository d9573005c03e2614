use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::config::CorsSettings;
use crate::presentation::handlers::{
    chat_handler, create_status_handler, health_handler, list_status_handler, root_handler,
    tts_handler,
};
use crate::presentation::state::AppState;

pub const API_PREFIX: &str = "/api";

/// `max_body_bytes` applies to `/api/chat` only; other routes keep axum's default.
pub fn create_router(state: AppState, cors: &CorsSettings, max_body_bytes: usize) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route(API_PREFIX, get(root_handler))
        .route(&format!("{API_PREFIX}/"), get(root_handler))
        .route(
            &format!("{API_PREFIX}/status"),
            post(create_status_handler).get(list_status_handler),
        )
        .route(
            &format!("{API_PREFIX}/chat"),
            post(chat_handler).layer(DefaultBodyLimit::max(max_body_bytes)),
        )
        .route(&format!("{API_PREFIX}/tts"), post(tts_handler))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors_layer(cors))
        .with_state(state)
}

/// A wildcard entry allows any origin without credentials; an explicit list
/// allows credentials and mirrors the requested methods and headers.
pub fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    if settings.allowed_origins.is_empty() || settings.allowed_origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
