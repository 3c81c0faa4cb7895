use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and upstream mode.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "autocover-api",
        "completion_mode": format!("{:?}", state.config.completion_mode).to_lowercase(),
        "credential_configured": state.config.azure_api_key.is_some(),
    }))
}
