use async_trait::async_trait;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

/// Returns a canned transcript, or fails the way it was told to.
pub struct MockTranscriptionEngine {
    outcome: MockOutcome,
}

enum MockOutcome {
    Transcript(String),
    Unintelligible,
    Unavailable,
}

impl MockTranscriptionEngine {
    pub fn returning(transcript: impl Into<String>) -> Self {
        Self {
            outcome: MockOutcome::Transcript(transcript.into()),
        }
    }

    pub fn unintelligible() -> Self {
        Self {
            outcome: MockOutcome::Unintelligible,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            outcome: MockOutcome::Unavailable,
        }
    }
}

#[async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(&self, audio_data: &[u8]) -> Result<String, TranscriptionError> {
        if audio_data.is_empty() {
            return Err(TranscriptionError::EmptyAudio);
        }

        match &self.outcome {
            MockOutcome::Transcript(text) => Ok(text.clone()),
            MockOutcome::Unintelligible => Err(TranscriptionError::Unintelligible),
            MockOutcome::Unavailable => Err(TranscriptionError::ServiceUnavailable(
                "mock speech service offline".to_string(),
            )),
        }
    }
}
