use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub speech_to_text: bool,
    pub text_to_speech: bool,
    pub faq_count: usize,
}

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            speech_to_text: state.transcription_engine.is_some(),
            text_to_speech: false,
            faq_count: state.faq_store.len(),
        }),
    )
}
