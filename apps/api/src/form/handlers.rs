//! Axum route handlers for the cover letter form.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::form::controller::FormController;
use crate::form::state::FormState;
use crate::models::generation::GenerationRequest;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub letter: String,
    /// True when manual job details replaced an unusable job link.
    pub used_fallback: bool,
}

/// POST /api/cover-letter
///
/// Runs one form cycle server-side: validate → resolve job → build prompt → complete.
/// Each request gets its own controller, so cycles never share state.
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let mut form = FormController::new(state.parser.clone(), state.completion.clone());

    form.submit(&request).await;

    match form.state() {
        FormState::Success {
            letter,
            used_fallback,
        } => Ok(Json(CoverLetterResponse {
            letter: letter.clone(),
            used_fallback: *used_fallback,
        })),
        FormState::Idle {
            notice: Some(notice),
        } => Err(AppError::Validation(notice.clone())),
        FormState::Error { message, .. } => Err(AppError::Generation(message.clone())),
        other => Err(AppError::Internal(anyhow::anyhow!(
            "form cycle ended unsettled: {other:?}"
        ))),
    }
}
