//! Client for the external job-posting parser.
//!
//! The parser takes a posting URL and returns `{ title, domain, content }`; any of
//! those may be missing or empty.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("parser returned status {status}")]
    Status { status: u16 },
}

/// Structured reply from the parsing service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ParsedListing {
    #[serde(default)]
    pub title: Option<String>,
    /// Hostname of the posting; stands in for the company name.
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Extracts job fields from a posting URL. Carried as `Arc<dyn JobParser>`.
#[async_trait]
pub trait JobParser: Send + Sync {
    async fn parse(&self, url: &str) -> Result<ParsedListing, ParserError>;
}

#[derive(Clone)]
pub struct HttpJobParser {
    client: Client,
    base_url: String,
}

impl HttpJobParser {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl JobParser for HttpJobParser {
    async fn parse(&self, url: &str) -> Result<ParsedListing, ParserError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("url", url)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ParserError::Status {
                status: status.as_u16(),
            });
        }

        let listing: ParsedListing = response.json().await?;
        debug!(
            "Parsed listing: title={:?} domain={:?} content_len={}",
            listing.title,
            listing.domain,
            listing.content.as_deref().map_or(0, str::len)
        );
        Ok(listing)
    }
}
