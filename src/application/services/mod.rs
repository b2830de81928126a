mod answer_service;
mod faq_store;
mod intent_engine;
mod similarity;

pub use answer_service::{Answer, AnswerService, DEFAULT_FALLBACK_MESSAGE};
pub use faq_store::{FaqStore, MissingSourcePolicy, default_faqs};
pub use intent_engine::IntentEngine;
pub use similarity::similarity;
