use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use super::error_response::error_response;

#[derive(Deserialize)]
pub struct TextToSpeechRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Serialize)]
pub struct TextToSpeechResponse {
    pub status: String,
    pub text: String,
}

/// Speech synthesis happens in the browser; this only acknowledges the text.
pub async fn text_to_speech_handler(Json(request): Json<TextToSpeechRequest>) -> impl IntoResponse {
    let text = request.text.unwrap_or_default().trim().to_string();

    if text.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No text provided");
    }

    tracing::debug!(chars = text.chars().count(), "Text-to-speech request acknowledged");

    (
        StatusCode::OK,
        Json(TextToSpeechResponse {
            status: "received".to_string(),
            text,
        }),
    )
        .into_response()
}
