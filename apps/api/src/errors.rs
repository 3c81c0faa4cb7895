use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Fixed message returned when the completion upstream fails.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Error calling Azure OpenAI";

/// Fixed message returned for a non-POST call to a POST-only endpoint.
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Only POST requests allowed";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders the same flat body: `{ "error": "<message>" }`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Validation error: {0}")]
    Validation(String),

    /// Completion upstream failed. The cause is logged by `proxy::forward_prompt`,
    /// never returned.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// A form generation cycle settled in error; carries the user-facing message.
    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Upstream(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                METHOD_NOT_ALLOWED_MESSAGE.to_string(),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                UPSTREAM_FAILURE_MESSAGE.to_string(),
            ),
            AppError::Generation(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
