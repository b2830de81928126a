use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::services::Answer;
use crate::infrastructure::observability::sanitize_user_text;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Serialize)]
pub struct AskResponse {
    pub answer: String,
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl From<Answer> for AskResponse {
    fn from(answer: Answer) -> Self {
        match answer {
            Answer::Matched {
                question,
                answer,
                score,
            } => Self {
                answer,
                matched: true,
                matched_question: Some(question),
                score: Some(score),
            },
            Answer::Fallback { message } => Self {
                answer: message,
                matched: false,
                matched_question: None,
                score: None,
            },
        }
    }
}

#[tracing::instrument(skip(state, request))]
pub async fn ask_handler(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> impl IntoResponse {
    let question = request.question.unwrap_or_default();
    let question = question.trim();

    if question.is_empty() {
        tracing::warn!("Ask request with blank question");
        return (
            StatusCode::BAD_REQUEST,
            Json(AskResponse {
                answer: state.settings.chat.empty_question_message.clone(),
                matched: false,
                matched_question: None,
                score: None,
            }),
        );
    }

    tracing::debug!(question = %sanitize_user_text(question), "Processing question");

    let answer = state.answer_service.answer(question);
    tracing::info!(matched = answer.is_match(), score = ?answer.score(), "Question answered");

    (StatusCode::OK, Json(AskResponse::from(answer)))
}
