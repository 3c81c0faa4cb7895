use std::sync::Arc;

use crate::config::Config;
use crate::job_source::JobParser;
use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Upstream completion client, chat or legacy per `COMPLETION_MODE`.
    pub completion: Arc<dyn CompletionClient>,
    pub parser: Arc<dyn JobParser>,
}
