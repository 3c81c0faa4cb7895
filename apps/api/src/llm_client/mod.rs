/// LLM Client — the single point of entry for all completion calls in AutoCover.
///
/// ARCHITECTURAL RULE: No other module may call the upstream completion service directly.
/// Handlers and the form pipeline only ever see `dyn CompletionClient`.
///
/// Two upstream payload shapes exist. `AzureChatClient` is canonical; `LegacyPromptClient`
/// is kept for older deployments and is only used when `COMPLETION_MODE=legacy`.
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

use crate::config::{CompletionMode, Config};

pub mod chat;
pub mod legacy;

pub use chat::AzureChatClient;
pub use legacy::LegacyPromptClient;

pub const MAX_TOKENS: u32 = 800;
pub const TEMPERATURE: f32 = 0.7;

/// Substituted when the upstream reply carries no generated text.
pub const NO_RESPONSE_TEXT: &str = "No response";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LlmError {
    /// True when the upstream was never reached (connect, DNS, TLS).
    pub fn is_transport(&self) -> bool {
        matches!(self, LlmError::Http(e) if e.is_connect() || e.is_timeout() || e.is_request())
    }
}

/// Turns a prompt into generated text. Carried as `Arc<dyn CompletionClient>`.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Picks the upstream client variant named by `config.completion_mode`.
pub fn build_client(config: &Config, http: Client) -> Arc<dyn CompletionClient> {
    let endpoint = config.completion_endpoint.clone();
    let api_key = config.azure_api_key.clone();
    match config.completion_mode {
        CompletionMode::Chat => Arc::new(AzureChatClient::new(http, endpoint, api_key)),
        CompletionMode::Legacy => Arc::new(LegacyPromptClient::new(http, endpoint, api_key)),
    }
}

/// Attaches the `api-key` header when a credential is configured.
fn authenticate(request: RequestBuilder, api_key: Option<&str>) -> RequestBuilder {
    match api_key {
        Some(key) => request.header("api-key", key),
        None => {
            warn!("No upstream credential configured; sending completion request without api-key");
            request
        }
    }
}

/// Sends a prepared request and decodes the JSON reply whatever its status.
///
/// Upstream error replies are still JSON (`{"error": {...}}`) and decode into a reply
/// with no choices, which callers turn into `NO_RESPONSE_TEXT`. Only a body that is
/// not the expected JSON becomes an error: `Api` for a non-2xx status, `Parse` otherwise.
async fn send_and_decode<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, LlmError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    match serde_json::from_str::<T>(&body) {
        Ok(reply) => {
            if !status.is_success() {
                warn!("Completion upstream returned {status}: {body}");
            }
            Ok(reply)
        }
        Err(_) if !status.is_success() => Err(LlmError::Api {
            status: status.as_u16(),
            message: body,
        }),
        Err(e) => Err(LlmError::Parse(e)),
    }
}

/// Empty or missing generated text collapses to `NO_RESPONSE_TEXT`.
fn text_or_fallback(text: Option<String>) -> String {
    text.filter(|t| !t.is_empty())
        .unwrap_or_else(|| NO_RESPONSE_TEXT.to_string())
}
