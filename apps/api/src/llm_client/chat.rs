//! Canonical upstream client: chat-completions payload with a single user message.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    authenticate, send_and_decode, text_or_fallback, CompletionClient, LlmError, MAX_TOKENS,
    TEMPERATURE,
};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Option<Vec<ChatChoice>>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatReplyMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatReplyMessage {
    content: Option<String>,
}

impl ChatResponse {
    fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .flatten()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
    }
}

#[derive(Clone)]
pub struct AzureChatClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl AzureChatClient {
    pub fn new(client: Client, endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client,
            endpoint,
            api_key,
        }
    }
}

#[async_trait]
impl CompletionClient for AzureChatClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let body = ChatRequest {
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let request = self.client.post(&self.endpoint).json(&body);
        let reply: ChatResponse =
            send_and_decode(authenticate(request, self.api_key.as_deref())).await?;
        debug!(
            "Chat completion returned {} choice(s)",
            reply.choices.as_ref().map_or(0, Vec::len)
        );

        Ok(text_or_fallback(reply.into_text()))
    }
}
