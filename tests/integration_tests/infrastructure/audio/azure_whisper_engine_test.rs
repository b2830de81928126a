use interavoice::application::ports::{TranscriptionEngine, TranscriptionError};
use interavoice::infrastructure::audio::AzureWhisperEngine;

use super::mock_server::{ReceivedFile, start_mock_speech_server, start_recording_speech_server};

const ROUTE: &str = "/openai/deployments/my-deployment/audio/transcriptions";

fn engine(base_url: &str) -> AzureWhisperEngine {
    AzureWhisperEngine::new(base_url, "my-deployment", "test-key", "2024-02-01")
}

#[tokio::test]
async fn given_valid_audio_bytes_when_azure_transcribes_then_returns_trimmed_text() {
    let (base_url, shutdown_tx) =
        start_mock_speech_server(ROUTE, 200, r#"{"text": "  What is InteraVoice?  "}"#).await;

    let result = engine(&base_url).transcribe(b"fake audio bytes").await;

    assert_eq!(result.unwrap(), "What is InteraVoice?");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_azure_api_returns_bad_request_when_transcribing_then_returns_api_error() {
    let body = r#"{"error": {"code": "InvalidRequest", "message": "bad audio"}}"#;
    let (base_url, shutdown_tx) = start_mock_speech_server(ROUTE, 400, body).await;

    let result = engine(&base_url).transcribe(b"bad audio").await;

    assert!(matches!(result, Err(TranscriptionError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_azure_api_returns_empty_text_when_transcribing_then_reports_unintelligible() {
    let (base_url, shutdown_tx) = start_mock_speech_server(ROUTE, 200, r#"{"text": ""}"#).await;

    let result = engine(&base_url).transcribe(b"silent audio").await;

    assert!(matches!(result, Err(TranscriptionError::Unintelligible)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_azure_rate_limit_when_transcribing_then_returns_rate_limited() {
    let (base_url, shutdown_tx) = start_mock_speech_server(ROUTE, 429, "slow down").await;

    let result = engine(&base_url).transcribe(b"audio").await;

    assert!(matches!(result, Err(TranscriptionError::RateLimited)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_azure_server_error_when_transcribing_then_returns_service_unavailable() {
    let (base_url, shutdown_tx) = start_mock_speech_server(ROUTE, 503, "maintenance").await;

    let result = engine(&base_url).transcribe(b"audio").await;

    assert!(matches!(
        result,
        Err(TranscriptionError::ServiceUnavailable(_))
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_webm_recording_when_azure_transcribes_then_upload_is_labelled_webm() {
    let (base_url, shutdown_tx, received) =
        start_recording_speech_server(ROUTE, r#"{"text": "hello"}"#).await;
    let webm: [u8; 9] = [0x1A, 0x45, 0xDF, 0xA3, 0x9F, 0x42, 0x86, 0x81, 0x01];

    let result = engine(&base_url).transcribe(&webm).await;

    assert_eq!(result.unwrap(), "hello");
    assert_eq!(
        received.lock().unwrap().as_slice(),
        &[ReceivedFile {
            file_name: Some("audio.webm".to_string()),
            content_type: Some("audio/webm".to_string()),
        }]
    );
    shutdown_tx.send(()).ok();
}
