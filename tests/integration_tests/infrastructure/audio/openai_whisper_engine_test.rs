use interavoice::application::ports::{TranscriptionEngine, TranscriptionError};
use interavoice::infrastructure::audio::OpenAiWhisperEngine;

use super::mock_server::{
    ReceivedFile, start_mock_speech_server, start_recording_speech_server, unused_base_url,
};

const ROUTE: &str = "/audio/transcriptions";

fn engine(base_url: String) -> OpenAiWhisperEngine {
    OpenAiWhisperEngine::new("sk-test".to_string(), Some(base_url), None)
}

#[tokio::test]
async fn given_text_response_when_openai_transcribes_then_returns_trimmed_transcript() {
    let (base_url, shutdown_tx) =
        start_mock_speech_server(ROUTE, 200, "how much does it cost\n").await;

    let result = engine(base_url).transcribe(b"audio").await;

    assert_eq!(result.unwrap(), "how much does it cost");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_base_url_with_trailing_slash_when_transcribing_then_route_still_resolves() {
    let (base_url, shutdown_tx) = start_mock_speech_server(ROUTE, 200, "hello").await;

    let result = engine(format!("{}/", base_url)).transcribe(b"audio").await;

    assert_eq!(result.unwrap(), "hello");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_blank_transcript_when_transcribing_then_reports_unintelligible() {
    let (base_url, shutdown_tx) = start_mock_speech_server(ROUTE, 200, "   ").await;

    let result = engine(base_url).transcribe(b"noise").await;

    assert!(matches!(result, Err(TranscriptionError::Unintelligible)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unauthorized_response_when_transcribing_then_returns_api_error() {
    let (base_url, shutdown_tx) = start_mock_speech_server(ROUTE, 401, "invalid key").await;

    let result = engine(base_url).transcribe(b"audio").await;

    match result {
        Err(TranscriptionError::ApiRequestFailed(message)) => {
            assert!(message.contains("401"));
            assert!(message.contains("invalid key"));
        }
        other => panic!("expected api error, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_service_when_transcribing_then_returns_service_unavailable() {
    let base_url = unused_base_url().await;

    let result = engine(base_url).transcribe(b"audio").await;

    assert!(matches!(
        result,
        Err(TranscriptionError::ServiceUnavailable(_))
    ));
}

#[tokio::test]
async fn given_empty_audio_when_transcribing_then_fails_without_calling_service() {
    let base_url = unused_base_url().await;

    let result = engine(base_url).transcribe(&[]).await;

    assert!(matches!(result, Err(TranscriptionError::EmptyAudio)));
}

async fn uploaded_file_for(audio: &[u8]) -> ReceivedFile {
    let (base_url, shutdown_tx, received) = start_recording_speech_server(ROUTE, "hello").await;

    let result = engine(base_url).transcribe(audio).await;
    assert_eq!(result.unwrap(), "hello");
    shutdown_tx.send(()).ok();

    let files = received.lock().unwrap().clone();
    assert_eq!(files.len(), 1);
    files[0].clone()
}

#[tokio::test]
async fn given_webm_recording_when_openai_transcribes_then_upload_is_labelled_webm() {
    let webm: [u8; 9] = [0x1A, 0x45, 0xDF, 0xA3, 0x9F, 0x42, 0x86, 0x81, 0x01];

    let file = uploaded_file_for(&webm).await;

    assert_eq!(file.file_name.as_deref(), Some("audio.webm"));
    assert_eq!(file.content_type.as_deref(), Some("audio/webm"));
}

#[tokio::test]
async fn given_wav_recording_when_openai_transcribes_then_upload_is_labelled_wav() {
    let file = uploaded_file_for(b"RIFF\x24\x00\x00\x00WAVEfmt ").await;

    assert_eq!(file.file_name.as_deref(), Some("audio.wav"));
    assert_eq!(file.content_type.as_deref(), Some("audio/wav"));
}

#[tokio::test]
async fn given_safari_mp4_recording_when_openai_transcribes_then_upload_is_labelled_m4a() {
    let file = uploaded_file_for(b"\x00\x00\x00\x20ftypM4A \x00\x00").await;

    assert_eq!(file.file_name.as_deref(), Some("audio.m4a"));
    assert_eq!(file.content_type.as_deref(), Some("audio/mp4"));
}

#[tokio::test]
async fn given_unrecognised_bytes_when_openai_transcribes_then_upload_falls_back_to_wav() {
    let file = uploaded_file_for(b"not a known container").await;

    assert_eq!(file.file_name.as_deref(), Some("audio.wav"));
}
