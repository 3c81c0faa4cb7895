//! Axum route handlers for the Completion Proxy.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::proxy::forward_prompt;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub text: String,
}

/// POST /api/generate
///
/// Forwards `prompt` to the completion upstream and returns `{ text }`.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let text = forward_prompt(state.completion.as_ref(), &request.prompt).await?;
    Ok(Json(GenerateResponse { text }))
}

/// Fallback for every non-POST verb on POST-only routes.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
