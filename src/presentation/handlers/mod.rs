mod ask;
mod error_response;
mod faqs;
mod health;
mod speech_to_text;
mod text_to_speech;

pub use ask::{AskRequest, AskResponse, ask_handler};
pub use error_response::{ErrorResponse, error_response};
pub use faqs::{list_faqs_handler, reload_faqs_handler};
pub use health::{HealthResponse, health_handler};
pub use speech_to_text::{SpeechToTextResponse, speech_to_text_handler};
pub use text_to_speech::text_to_speech_handler;
