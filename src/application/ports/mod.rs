mod faq_source;
mod transcription_engine;

pub use faq_source::{FaqSource, FaqSourceError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
