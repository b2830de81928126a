use std::sync::Arc;

use crate::application::services::faq_store::FaqStore;
use crate::application::services::intent_engine::IntentEngine;

pub const DEFAULT_FALLBACK_MESSAGE: &str = "Sorry, I don't have an answer for that yet. \
     Try asking what InteraVoice is or how much it costs.";

#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Matched {
        question: String,
        answer: String,
        score: f64,
    },
    Fallback {
        message: String,
    },
}

impl Answer {
    pub fn text(&self) -> &str {
        match self {
            Answer::Matched { answer, .. } => answer,
            Answer::Fallback { message } => message,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Answer::Matched { .. })
    }

    pub fn score(&self) -> Option<f64> {
        match self {
            Answer::Matched { score, .. } => Some(*score),
            Answer::Fallback { .. } => None,
        }
    }
}

/// Answers a question from the current FAQ snapshot.
pub struct AnswerService {
    store: Arc<FaqStore>,
    engine: IntentEngine,
    fallback_message: String,
}

impl AnswerService {
    pub fn new(store: Arc<FaqStore>, engine: IntentEngine, fallback_message: String) -> Self {
        Self {
            store,
            engine,
            fallback_message,
        }
    }

    pub fn answer(&self, question: &str) -> Answer {
        let faqs = self.store.all_faqs();

        match self.engine.best_match(question.trim(), &faqs) {
            Some(found) => Answer::Matched {
                question: found.question().to_string(),
                answer: found.answer().to_string(),
                score: found.score,
            },
            None => Answer::Fallback {
                message: self.fallback_message.clone(),
            },
        }
    }

    pub fn store(&self) -> &Arc<FaqStore> {
        &self.store
    }
}
