use interavoice::application::ports::{TranscriptionEngine, TranscriptionError};
use interavoice::infrastructure::audio::MockTranscriptionEngine;

#[tokio::test]
async fn given_canned_transcript_when_transcribing_then_returns_it() {
    let engine = MockTranscriptionEngine::returning("what is interavoice");

    let text = engine.transcribe(b"RIFF....WAVE").await.unwrap();

    assert_eq!(text, "what is interavoice");
}

#[tokio::test]
async fn given_empty_audio_when_transcribing_then_returns_empty_audio_error() {
    let engine = MockTranscriptionEngine::returning("ignored");

    let result = engine.transcribe(&[]).await;

    assert!(matches!(result, Err(TranscriptionError::EmptyAudio)));
}

#[test]
fn given_error_kinds_then_classification_matches_http_policy() {
    assert!(TranscriptionError::Unintelligible.is_client_error());
    assert!(TranscriptionError::EmptyAudio.is_client_error());
    assert!(TranscriptionError::RateLimited.is_transient());
    assert!(TranscriptionError::ServiceUnavailable("down".to_string()).is_transient());

    let failed = TranscriptionError::ApiRequestFailed("status 400".to_string());
    assert!(!failed.is_client_error());
    assert!(!failed.is_transient());
}
