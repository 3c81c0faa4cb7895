use anyhow::{bail, Context, Result};
use tracing::warn;

const DEFAULT_CHAT_ENDPOINT: &str = "https://autocover-openai.openai.azure.com/openai/deployments/cover-letter-bot/chat/completions?api-version=2025-01-01-preview";
const DEFAULT_LEGACY_ENDPOINT: &str = "https://autocover-openai.openai.azure.com/openai/deployments/cover-letter-bot/completions?api-version=2022-12-01";
const DEFAULT_JOB_PARSER_URL: &str = "https://autocover-parser-wnot.onrender.com/parser";

/// Which upstream payload shape the completion proxy speaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompletionMode {
    /// `messages: [{role, content}]` against the chat completions route.
    #[default]
    Chat,
    /// Flat `prompt` string against the older completions route.
    Legacy,
}

impl CompletionMode {
    fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "chat" => Ok(CompletionMode::Chat),
            "legacy" => Ok(CompletionMode::Legacy),
            other => bail!("COMPLETION_MODE must be 'chat' or 'legacy', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream credential. Never serialized or echoed back to callers.
    pub azure_api_key: Option<String>,
    pub completion_mode: CompletionMode,
    pub completion_endpoint: String,
    pub job_parser_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let completion_mode = match get("COMPLETION_MODE") {
            Some(raw) => CompletionMode::parse(&raw)?,
            None => CompletionMode::default(),
        };

        let completion_endpoint = get("COMPLETION_ENDPOINT").unwrap_or_else(|| {
            match completion_mode {
                CompletionMode::Chat => DEFAULT_CHAT_ENDPOINT,
                CompletionMode::Legacy => DEFAULT_LEGACY_ENDPOINT,
            }
            .to_string()
        });

        Ok(Config {
            azure_api_key: get("AZURE_API_KEY"),
            completion_mode,
            completion_endpoint,
            job_parser_url: get("JOB_PARSER_URL")
                .unwrap_or_else(|| DEFAULT_JOB_PARSER_URL.to_string()),
            port: get("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Logs a warning when the upstream credential is missing. Startup continues.
    pub fn warn_if_unconfigured(&self) {
        if self.azure_api_key.is_none() {
            warn!("AZURE_API_KEY is not set; completion calls will be sent unauthenticated");
        }
    }
}
