use async_trait::async_trait;

/// Speech-to-text capability injected into the HTTP boundary.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, audio_data: &[u8]) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("no audio data received")]
    EmptyAudio,
    #[error("could not understand audio")]
    Unintelligible,
    #[error("speech service rate limit exceeded")]
    RateLimited,
    #[error("speech service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("transcription misconfigured: {0}")]
    Configuration(String),
}

impl TranscriptionError {
    /// The caller sent audio we cannot use; retrying the same bytes will not help.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::EmptyAudio | Self::Unintelligible)
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, Self::RateLimited | Self::ServiceUnavailable(_))
    }
}
