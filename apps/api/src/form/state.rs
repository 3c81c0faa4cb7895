//! Form lifecycle as a single state value with pure transitions.
//!
//! ```text
//! Idle ──Submit──▶ Validating ──ValidationPassed──▶ Loading ──Completed──▶ Success
//!  ▲                   │                               └──────Failed─────▶ Error
//!  └─ValidationFailed──┘          Success / Error ──Edited or Submit──▶ Idle / Validating
//! ```
//!
//! Pairs not drawn above leave the state unchanged. `Submit` while `Loading` is
//! the case that matters: it is how re-entrant submissions are refused.

use thiserror::Error;

use crate::models::generation::{non_blank, ErrorKind, GenerationRequest};

pub const VALIDATION_MESSAGE: &str =
    "Please paste your CV and either a job link OR a job description.";

pub const APOLOGY_MESSAGE: &str = "Something went wrong. Please check your input and try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Idle { notice: Option<String> },
    Validating,
    Loading,
    Success { letter: String, used_fallback: bool },
    Error { kind: ErrorKind, message: String },
}

impl Default for FormState {
    fn default() -> Self {
        FormState::Idle { notice: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    ValidationPassed,
    ValidationFailed(String),
    Completed { letter: String, used_fallback: bool },
    Failed(ErrorKind),
    Edited,
}

impl FormState {
    pub fn apply(self, event: FormEvent) -> FormState {
        use FormEvent as E;
        use FormState as S;

        match (self, event) {
            (S::Loading, E::Submit) => S::Loading,
            (S::Validating, E::Submit) => S::Validating,
            (_, E::Submit) => S::Validating,

            (S::Validating, E::ValidationPassed) => S::Loading,
            (S::Validating, E::ValidationFailed(msg)) => S::Idle { notice: Some(msg) },

            (S::Loading, E::Completed {
                letter,
                used_fallback,
            }) => S::Success {
                letter,
                used_fallback,
            },
            (S::Loading, E::Failed(kind)) => S::Error {
                kind,
                message: APOLOGY_MESSAGE.to_string(),
            },

            (S::Success { .. } | S::Error { .. } | S::Idle { .. }, E::Edited) => S::default(),

            (state, _) => state,
        }
    }

    /// The submit control is disabled while a cycle is in flight (`Validating` or `Loading`).
    pub fn submit_enabled(&self) -> bool {
        !matches!(self, FormState::Loading | FormState::Validating)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// CV must be non-blank, and at least one of job input / manual description.
pub fn validate(request: &GenerationRequest) -> Result<(), ValidationError> {
    let has_cv = !request.cv_text.trim().is_empty();
    let has_job = !request.job_input.trim().is_empty()
        || non_blank(request.manual_description.as_deref()).is_some();

    if has_cv && has_job {
        Ok(())
    } else {
        Err(ValidationError(VALIDATION_MESSAGE.to_string()))
    }
}
