//! Job Source Resolver — turns the job input plus manual fields into a `ResolvedJob`.
//!
//! Order of preference:
//! 1. URL-shaped input → external parser (`SourceKind::Parsed`)
//! 2. Any other non-blank input → used verbatim as the description (`SourceKind::Raw`)
//! 3. Manual description, when 1 produced nothing or no input was given (`SourceKind::Manual`)
//!
//! Trimming only decides blankness and link shape; stored descriptions keep the
//! exact text that was supplied.
//!
//! Parser failures are never fatal on their own; they only surface as a
//! `ResolveError` when there is no manual description to fall back on.

use thiserror::Error;
use tracing::{info, warn};

use crate::job_source::parser_client::JobParser;
use crate::models::generation::{GenerationRequest, ResolvedJob, SourceKind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("job link could not be parsed and no manual description was given: {reason}")]
    LinkUnusable { reason: String },

    #[error("no job link, job text, or manual description was given")]
    MissingJobDetails,
}

/// Heuristic link detection: trimmed input starts with `http://` or `https://`
/// (ASCII case-insensitive). Deliberately not a URL grammar check; anything
/// else is treated as pasted job text.
pub fn looks_like_url(input: &str) -> bool {
    let input = input.trim_start();
    ["http://", "https://"].iter().any(|scheme| {
        input
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

pub async fn resolve_job(
    request: &GenerationRequest,
    parser: &dyn JobParser,
) -> Result<ResolvedJob, ResolveError> {
    let job_input = request.job_input.trim();
    let manual_title = request.manual_job_title.as_deref();
    let manual_company = request.manual_company.as_deref();

    let mut link_failure: Option<String> = None;

    if !job_input.is_empty() {
        if !looks_like_url(job_input) {
            return Ok(ResolvedJob::new(
                manual_title,
                manual_company,
                request.job_input.clone(),
                SourceKind::Raw,
            ));
        }

        match parser.parse(job_input).await {
            Ok(listing) => match listing.content.as_deref().filter(|c| !c.trim().is_empty()) {
                Some(content) => {
                    info!("Job link parsed: {job_input}");
                    return Ok(ResolvedJob::new(
                        listing.title.as_deref(),
                        listing.domain.as_deref(),
                        content.to_string(),
                        SourceKind::Parsed,
                    ));
                }
                None => {
                    warn!("Job parser returned no description for {job_input}");
                    link_failure = Some("parser returned no description".to_string());
                }
            },
            Err(e) => {
                warn!("Job parser failed for {job_input}: {e}");
                link_failure = Some(e.to_string());
            }
        }
    }

    match request
        .manual_description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
    {
        Some(description) => {
            info!("Using manual job details fallback");
            Ok(ResolvedJob::new(
                manual_title,
                manual_company,
                description.to_string(),
                SourceKind::Manual,
            ))
        }
        None => Err(match link_failure {
            Some(reason) => ResolveError::LinkUnusable { reason },
            None => ResolveError::MissingJobDetails,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job_source::parser_client::{ParsedListing, ParserError};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fake parser that counts calls and replays a fixed outcome.
    struct StubParser {
        calls: AtomicUsize,
        reply: Option<ParsedListing>,
    }

    impl StubParser {
        fn replying(listing: ParsedListing) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                reply: Some(listing),
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                reply: None,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl JobParser for StubParser {
        async fn parse(&self, _url: &str) -> Result<ParsedListing, ParserError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply
                .clone()
                .ok_or(ParserError::Status { status: 503 })
        }
    }

    fn listing(title: &str, domain: &str, content: &str) -> ParsedListing {
        ParsedListing {
            title: Some(title.to_string()),
            domain: Some(domain.to_string()),
            content: Some(content.to_string()),
        }
    }

    fn request(job_input: &str, manual_description: Option<&str>) -> GenerationRequest {
        GenerationRequest {
            cv_text: "Experienced engineer...".to_string(),
            job_input: job_input.to_string(),
            manual_description: manual_description.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_looks_like_url_accepts_http_schemes() {
        assert!(looks_like_url("https://jobs.example.com/1"));
        assert!(looks_like_url("http://jobs.example.com/1"));
        assert!(looks_like_url("  HTTPS://Jobs.Example.com"));
    }

    #[test]
    fn test_looks_like_url_rejects_everything_else() {
        assert!(!looks_like_url("We need a backend engineer with Go experience"));
        assert!(!looks_like_url("jobs.example.com/1"));
        assert!(!looks_like_url("ftp://jobs.example.com"));
        assert!(!looks_like_url("See https://jobs.example.com"));
        assert!(!looks_like_url("http"));
        assert!(!looks_like_url(""));
    }

    #[tokio::test]
    async fn test_url_input_uses_parser_fields() {
        let parser = StubParser::replying(listing("SRE", "acme.io", "Keep prod up."));
        let job = resolve_job(&request("https://acme.io/jobs/1", None), &parser)
            .await
            .unwrap();
        assert_eq!(parser.calls(), 1);
        assert_eq!(job.source_kind, SourceKind::Parsed);
        assert_eq!(job.title, "SRE");
        assert_eq!(job.company, "acme.io");
        assert_eq!(job.description, "Keep prod up.");
    }

    #[tokio::test]
    async fn test_parsed_listing_without_title_gets_placeholders() {
        let parser = StubParser::replying(ParsedListing {
            content: Some("Keep prod up.".into()),
            ..Default::default()
        });
        let job = resolve_job(&request("https://acme.io/jobs/1", None), &parser)
            .await
            .unwrap();
        assert_eq!(job.title, "Unknown Title");
        assert_eq!(job.company, "Unknown Company");
    }

    #[tokio::test]
    async fn test_text_input_is_raw_without_parser_call() {
        let parser = StubParser::failing();
        let input = "We need a backend engineer with Go experience";
        let job = resolve_job(&request(input, None), &parser).await.unwrap();
        assert_eq!(parser.calls(), 0);
        assert_eq!(job.source_kind, SourceKind::Raw);
        assert_eq!(job.description, input);
    }

    #[tokio::test]
    async fn test_raw_input_takes_manual_title_and_company() {
        let parser = StubParser::failing();
        let mut req = request("Own our billing service", None);
        req.manual_job_title = Some("Staff Engineer".into());
        req.manual_company = Some("Globex".into());
        let job = resolve_job(&req, &parser).await.unwrap();
        assert_eq!(job.title, "Staff Engineer");
        assert_eq!(job.company, "Globex");
    }

    #[tokio::test]
    async fn test_empty_parse_falls_back_to_manual() {
        let parser = StubParser::replying(listing("SRE", "acme.io", "   "));
        let mut req = request("https://acme.io/jobs/1", Some("Manual description"));
        req.manual_job_title = Some("Manual Title".into());
        let job = resolve_job(&req, &parser).await.unwrap();
        assert_eq!(job.source_kind, SourceKind::Manual);
        assert!(job.used_fallback());
        assert_eq!(job.description, "Manual description");
        assert_eq!(job.title, "Manual Title");
        assert_eq!(job.company, "Unknown Company");
    }

    #[tokio::test]
    async fn test_parser_failure_falls_back_to_manual() {
        let parser = StubParser::failing();
        let req = request("https://acme.io/jobs/1", Some("Manual description"));
        let job = resolve_job(&req, &parser).await.unwrap();
        assert_eq!(parser.calls(), 1);
        assert_eq!(job.source_kind, SourceKind::Manual);
    }

    #[tokio::test]
    async fn test_parser_failure_without_manual_is_error() {
        let parser = StubParser::failing();
        let err = resolve_job(&request("https://acme.io/jobs/1", None), &parser)
            .await
            .unwrap_err();
        assert!(matches!(err, ResolveError::LinkUnusable { .. }));
    }

    #[tokio::test]
    async fn test_manual_only_input_is_manual() {
        let parser = StubParser::failing();
        let job = resolve_job(&request("", Some("Pasted description")), &parser)
            .await
            .unwrap();
        assert_eq!(parser.calls(), 0);
        assert_eq!(job.source_kind, SourceKind::Manual);
    }

    #[tokio::test]
    async fn test_nothing_supplied_is_error() {
        let parser = StubParser::failing();
        let err = resolve_job(&request("  ", Some(" ")), &parser).await.unwrap_err();
        assert_eq!(err, ResolveError::MissingJobDetails);
    }

    #[tokio::test]
    async fn test_raw_description_keeps_surrounding_whitespace() {
        let parser = StubParser::failing();
        let input = "  We need a backend engineer with Go experience\n";
        let job = resolve_job(&request(input, None), &parser).await.unwrap();
        assert_eq!(job.source_kind, SourceKind::Raw);
        assert_eq!(job.description, input);
    }

    #[tokio::test]
    async fn test_manual_description_is_stored_verbatim() {
        let parser = StubParser::replying(listing("SRE", "acme.io", ""));
        let req = request("https://acme.io/jobs/1\n", Some("Maintain TPS reports\n"));
        let job = resolve_job(&req, &parser).await.unwrap();
        assert_eq!(parser.calls(), 1);
        assert_eq!(job.source_kind, SourceKind::Manual);
        assert_eq!(job.description, "Maintain TPS reports\n");
    }
}
