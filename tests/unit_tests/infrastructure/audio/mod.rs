mod audio_format_test;
mod mock_transcription_engine_test;
