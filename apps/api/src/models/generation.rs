use serde::Deserialize;

use crate::letter::tone::Tone;

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_COMPANY: &str = "Unknown Company";

/// Everything the user typed into the form for one generation cycle.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub cv_text: String,
    /// A job posting URL or the posting text itself.
    #[serde(default)]
    pub job_input: String,
    #[serde(default)]
    pub manual_job_title: Option<String>,
    #[serde(default)]
    pub manual_company: Option<String>,
    #[serde(default)]
    pub manual_description: Option<String>,
    #[serde(default)]
    pub tone: Tone,
}

/// Where a `ResolvedJob`'s description came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Returned by the external parsing service for a job URL.
    Parsed,
    /// Taken from the manual fields after the link path produced nothing.
    Manual,
    /// Non-URL job input used verbatim.
    Raw,
}

/// Normalized job fields. Title and company are never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedJob {
    pub title: String,
    pub company: String,
    pub description: String,
    pub source_kind: SourceKind,
}

impl ResolvedJob {
    /// Fills blank title/company with placeholders.
    pub fn new(
        title: Option<&str>,
        company: Option<&str>,
        description: String,
        source_kind: SourceKind,
    ) -> Self {
        Self {
            title: non_blank(title).unwrap_or(UNKNOWN_TITLE).to_string(),
            company: non_blank(company).unwrap_or(UNKNOWN_COMPANY).to_string(),
            description,
            source_kind,
        }
    }

    /// True when the manual fields stood in for the job link.
    pub fn used_fallback(&self) -> bool {
        self.source_kind == SourceKind::Manual
    }
}

/// Why a generation cycle failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UpstreamError,
    NetworkError,
    ValidationError,
}

/// Outcome of one generation cycle. Never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    Text { text: String, used_fallback: bool },
    Failed { error_kind: ErrorKind },
}

/// Returns the trimmed value if it has any content.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
