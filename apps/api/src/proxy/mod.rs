// Completion Proxy: relays a prompt to the upstream completion service with the
// server-held credential and hands back only the generated text.

pub mod handlers;

use tracing::{error, info};

use crate::llm_client::{CompletionClient, LlmError};

/// Sends `prompt` upstream. This is the one place upstream failures are logged
/// with full detail; callers map the returned `LlmError` to their own surface.
pub async fn forward_prompt(
    client: &dyn CompletionClient,
    prompt: &str,
) -> Result<String, LlmError> {
    match client.complete(prompt).await {
        Ok(text) => {
            info!("Completion returned {} chars", text.len());
            Ok(text)
        }
        Err(e) => {
            error!("Completion upstream call failed: {e}");
            Err(e)
        }
    }
}
