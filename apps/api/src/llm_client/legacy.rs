//! Legacy upstream client: flat `prompt` payload, text under `choices[0].text`.
//! Selected only with `COMPLETION_MODE=legacy`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{
    authenticate, send_and_decode, text_or_fallback, CompletionClient, LlmError, MAX_TOKENS,
    TEMPERATURE,
};

#[derive(Debug, Serialize)]
struct PromptRequest<'a> {
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct PromptResponse {
    #[serde(default)]
    choices: Option<Vec<PromptChoice>>,
}

#[derive(Debug, Deserialize)]
struct PromptChoice {
    text: Option<String>,
}

#[derive(Clone)]
pub struct LegacyPromptClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl LegacyPromptClient {
    pub fn new(client: Client, endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client,
            endpoint,
            api_key,
        }
    }
}

#[async_trait]
impl CompletionClient for LegacyPromptClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let body = PromptRequest {
            prompt,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let request = self.client.post(&self.endpoint).json(&body);
        let reply: PromptResponse =
            send_and_decode(authenticate(request, self.api_key.as_deref())).await?;
        let text = reply.choices.into_iter().flatten().next().and_then(|c| c.text);

        Ok(text_or_fallback(text))
    }
}
