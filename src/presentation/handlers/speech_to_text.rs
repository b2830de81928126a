use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use super::error_response::error_response;
use crate::application::ports::TranscriptionError;
use crate::infrastructure::audio::AudioFormat;
use crate::infrastructure::observability::sanitize_user_text;
use crate::presentation::state::AppState;

const AUDIO_FIELD: &str = "audio";

#[derive(Serialize)]
pub struct SpeechToTextResponse {
    pub text: String,
    pub answer: String,
    pub matched: bool,
}

/// Transcribes an uploaded recording and answers the transcript like a typed
/// question.
#[tracing::instrument(skip(state, multipart))]
pub async fn speech_to_text_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let Some(engine) = state.transcription_engine.clone() else {
        tracing::warn!("Speech-to-text requested but no transcription provider is configured");
        return error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "Speech recognition is not available",
        );
    };

    let mut audio = None;
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                let is_audio = field.name() == Some(AUDIO_FIELD) || field.file_name().is_some();
                if !is_audio {
                    continue;
                }
                tracing::debug!(
                    file_name = ?field.file_name(),
                    content_type = ?field.content_type(),
                    "Reading audio field"
                );
                match field.bytes().await {
                    Ok(bytes) => {
                        audio = Some(bytes);
                        break;
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read audio bytes");
                        return error_response(
                            e.status(),
                            format!("Failed to read audio file: {}", e.body_text()),
                        );
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return error_response(
                    e.status(),
                    format!("Failed to read upload: {}", e.body_text()),
                );
            }
        }
    }

    let Some(audio) = audio else {
        tracing::warn!("Speech-to-text request with no audio file");
        return error_response(StatusCode::BAD_REQUEST, "No audio file uploaded");
    };

    if audio.is_empty() {
        tracing::warn!("Speech-to-text request with empty audio file");
        return error_response(StatusCode::BAD_REQUEST, "Uploaded audio file is empty");
    }

    match AudioFormat::detect(&audio) {
        Some(format) => tracing::debug!(bytes = audio.len(), ?format, "Audio received"),
        None => tracing::warn!(
            bytes = audio.len(),
            "Unrecognised audio container, forwarding it labelled as WAV"
        ),
    }

    let text = match engine.transcribe(&audio).await {
        Ok(text) => text,
        Err(e) => {
            let (status, message) = transcription_failure(&e);
            tracing::warn!(error = %e, status = %status, "Transcription failed");
            return error_response(status, message);
        }
    };

    tracing::info!(transcript = %sanitize_user_text(&text), "Audio transcribed");

    let answer = state.answer_service.answer(&text);

    (
        StatusCode::OK,
        Json(SpeechToTextResponse {
            matched: answer.is_match(),
            answer: answer.text().to_string(),
            text,
        }),
    )
        .into_response()
}

fn transcription_failure(error: &TranscriptionError) -> (StatusCode, &'static str) {
    if error.is_client_error() {
        (
            StatusCode::BAD_REQUEST,
            "Could not understand audio. Please try again.",
        )
    } else if error.is_transient() {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            "Speech service is unavailable. Please try again later.",
        )
    } else if matches!(error, TranscriptionError::Configuration(_)) {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Speech recognition is misconfigured",
        )
    } else {
        (StatusCode::BAD_GATEWAY, "Speech service request failed")
    }
}
