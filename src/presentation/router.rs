use std::any::Any;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::middleware;
use axum::response::Response;
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    ask_handler, error_response, health_handler, list_faqs_handler, reload_faqs_handler,
    speech_to_text_handler, text_to_speech_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let upload_limit = DefaultBodyLimit::max(state.settings.transcription.max_upload_bytes());
    let json_limit = DefaultBodyLimit::max(state.settings.server.max_json_body_bytes());

    let mut router = Router::new()
        .route("/health", get(health_handler))
        .route("/ask", post(ask_handler).layer(json_limit))
        .route(
            "/speech-to-text",
            post(speech_to_text_handler).layer(upload_limit),
        )
        .route(
            "/text-to-speech",
            post(text_to_speech_handler).layer(json_limit),
        )
        .route("/api/v1/faqs", get(list_faqs_handler))
        .route("/api/v1/faqs/reload", post(reload_faqs_handler));

    if let Some(static_dir) = &state.settings.web.static_dir {
        tracing::info!(dir = %static_dir.display(), "Serving web UI");
        router = router.fallback_service(ServeDir::new(static_dir));
    }

    router
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    tracing::error!(panic = %detail, "Request handler panicked");

    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}
