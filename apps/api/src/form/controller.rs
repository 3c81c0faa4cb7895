//! Form Controller — drives one generation cycle through the form lifecycle.
//!
//! Flow: validate → resolve_job → build_prompt → forward_prompt → settle.
//! Each step awaits the previous one; nothing runs in parallel.

use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::form::state::{validate, FormEvent, FormState};
use crate::job_source::{resolve_job, JobParser};
use crate::letter::build_prompt;
use crate::llm_client::{CompletionClient, LlmError};
use crate::models::generation::{ErrorKind, GenerationRequest, GenerationResult};
use crate::proxy::forward_prompt;

pub struct FormController {
    state: FormState,
    parser: Arc<dyn JobParser>,
    completion: Arc<dyn CompletionClient>,
}

impl FormController {
    pub fn new(parser: Arc<dyn JobParser>, completion: Arc<dyn CompletionClient>) -> Self {
        Self {
            state: FormState::default(),
            parser,
            completion,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Any field edit returns a settled form to `Idle`.
    pub fn edit(&mut self) {
        self.transition(FormEvent::Edited);
    }

    /// Runs one full cycle and returns the resulting state.
    ///
    /// A submit while a cycle is in flight is refused without side effects.
    pub async fn submit(&mut self, request: &GenerationRequest) -> &FormState {
        if !self.state.submit_enabled() {
            warn!("Submit ignored: a generation cycle is already in flight");
            return &self.state;
        }

        self.transition(FormEvent::Submit);

        if let Err(e) = validate(request) {
            info!("Form validation failed: {e}");
            self.transition(FormEvent::ValidationFailed(e.0));
            return &self.state;
        }
        self.transition(FormEvent::ValidationPassed);

        let cycle_id = Uuid::new_v4();
        let result = self
            .run_pipeline(request)
            .instrument(info_span!("generation_cycle", %cycle_id, tone = %request.tone))
            .await;

        let event = match result {
            GenerationResult::Text {
                text,
                used_fallback,
            } => FormEvent::Completed {
                letter: text,
                used_fallback,
            },
            GenerationResult::Failed { error_kind } => FormEvent::Failed(error_kind),
        };
        self.transition(event);

        &self.state
    }

    async fn run_pipeline(&self, request: &GenerationRequest) -> GenerationResult {
        let job = match resolve_job(request, self.parser.as_ref()).await {
            Ok(job) => job,
            Err(e) => {
                warn!("Job resolution failed: {e}");
                return GenerationResult::Failed {
                    error_kind: ErrorKind::ValidationError,
                };
            }
        };
        info!("Job resolved from {:?}", job.source_kind);

        let prompt = build_prompt(request.tone, &job, &request.cv_text);

        match forward_prompt(self.completion.as_ref(), &prompt).await {
            Ok(text) => GenerationResult::Text {
                text,
                used_fallback: job.used_fallback(),
            },
            Err(e) => GenerationResult::Failed {
                error_kind: classify(&e),
            },
        }
    }

    fn transition(&mut self, event: FormEvent) {
        let current = std::mem::take(&mut self.state);
        self.state = current.apply(event);
    }
}

fn classify(e: &LlmError) -> ErrorKind {
    if e.is_transport() {
        ErrorKind::NetworkError
    } else {
        ErrorKind::UpstreamError
    }
}
