use std::sync::Arc;

use crate::application::ports::TranscriptionEngine;
use crate::application::services::{AnswerService, FaqStore};
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub answer_service: Arc<AnswerService>,
    pub faq_store: Arc<FaqStore>,
    /// `None` when speech-to-text is disabled.
    pub transcription_engine: Option<Arc<dyn TranscriptionEngine>>,
    pub settings: Settings,
}
