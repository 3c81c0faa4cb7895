pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::form::handlers::handle_cover_letter;
use crate::proxy::handlers::{handle_generate, method_not_allowed};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Completion Proxy
        .route(
            "/api/generate",
            post(handle_generate).fallback(method_not_allowed),
        )
        // Server-side form pipeline
        .route(
            "/api/cover-letter",
            post(handle_cover_letter).fallback(method_not_allowed),
        )
        .with_state(state)
}
