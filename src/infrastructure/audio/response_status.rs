use reqwest::StatusCode;

use crate::application::ports::TranscriptionError;

/// Maps a non-success provider response onto the transcription error taxonomy.
pub(super) fn classify_failure(status: StatusCode, body: String) -> TranscriptionError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        TranscriptionError::RateLimited
    } else if status.is_server_error() {
        TranscriptionError::ServiceUnavailable(format!("status {}: {}", status, body))
    } else {
        TranscriptionError::ApiRequestFailed(format!("status {}: {}", status, body))
    }
}

pub(super) fn classify_send_error(error: reqwest::Error) -> TranscriptionError {
    if error.is_connect() || error.is_timeout() {
        TranscriptionError::ServiceUnavailable(format!("request: {}", error))
    } else {
        TranscriptionError::ApiRequestFailed(format!("request: {}", error))
    }
}
