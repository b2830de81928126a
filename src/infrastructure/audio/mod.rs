mod audio_format;
mod azure_whisper_engine;
mod mock_transcription_engine;
mod openai_whisper_engine;
mod response_status;
mod transcription_engine_factory;

pub use audio_format::AudioFormat;
pub use azure_whisper_engine::AzureWhisperEngine;
pub use mock_transcription_engine::MockTranscriptionEngine;
pub use openai_whisper_engine::OpenAiWhisperEngine;
pub use transcription_engine_factory::{
    TranscriptionEngineFactory, TranscriptionProvider, WhisperOptions,
};
