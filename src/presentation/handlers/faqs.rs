use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use super::error_response::error_response;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ReloadResponse {
    pub faq_count: usize,
}

pub async fn list_faqs_handler(State(state): State<AppState>) -> impl IntoResponse {
    let faqs = state.faq_store.all_faqs();
    Json(faqs.entries().to_vec())
}

#[tracing::instrument(skip(state))]
pub async fn reload_faqs_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.faq_store.reload().await {
        Ok(faq_count) => (StatusCode::OK, Json(ReloadResponse { faq_count })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "FAQ reload failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("FAQ reload failed: {}", e),
            )
        }
    }
}
