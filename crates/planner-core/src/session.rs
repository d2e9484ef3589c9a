//! Session controller: the state machine driving plan generation.
//!
//! A [`Session`] owns a generator and tracks exactly one observable state
//! at a time. The four states form a tagged union so that impossible
//! combinations (loading and failed at once, a plan alongside an error)
//! cannot be represented.
//!
//! ```text
//! Idle ──submit──▶ Loading ──ok──▶ Ready ──submit──▶ Loading ...
//!                     │
//!                     └──err──▶ Failed ──submit──▶ Loading ...
//! ```
//!
//! Every submission is tagged with a monotonically increasing request id.
//! A completion is applied only when its id matches the latest outstanding
//! request; anything else is a stale response from an abandoned submission
//! and is discarded without touching state.

use log::{info, warn};

use crate::error::{PlannerError, Result};
use crate::export;
use crate::generator::PlanGenerator;
use crate::models::{LessonPlan, LessonRequest};
use crate::prompt::build_prompt;

/// Observable session state. Exactly one variant is ever active.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// No plan, no error, nothing in flight
    Idle,
    /// A generation request is in flight
    Loading {
        /// Id of the outstanding request
        request_id: u64,
        /// The request awaiting completion, kept for the echo-back step
        request: LessonRequest,
    },
    /// A plan was generated and is available for rendering and export
    Ready { plan: LessonPlan },
    /// The last generation attempt failed
    Failed { message: String },
}

/// Session controller owning the generator boundary.
pub struct Session<G> {
    generator: G,
    state: SessionState,
    next_request_id: u64,
}

impl<G: PlanGenerator> Session<G> {
    /// Creates an idle session around a generator.
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            state: SessionState::Idle,
            next_request_id: 0,
        }
    }

    /// Current observable state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The generated plan, if the session is in the Ready state.
    pub fn plan(&self) -> Option<&LessonPlan> {
        match &self.state {
            SessionState::Ready { plan } => Some(plan),
            _ => None,
        }
    }

    /// The failure message, if the session is in the Failed state.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SessionState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Begin a new generation attempt.
    ///
    /// Validates the request, discards any previous plan or error, and
    /// moves to Loading under a fresh request id. A blank topic is rejected
    /// before any state change and never reaches the generator.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - when the topic is empty
    pub fn begin(&mut self, request: &LessonRequest) -> Result<u64> {
        request.validate()?;

        self.next_request_id += 1;
        let request_id = self.next_request_id;
        info!("Generation request {request_id} started: {}", request.topic);

        self.state = SessionState::Loading {
            request_id,
            request: request.clone(),
        };
        Ok(request_id)
    }

    /// Apply the outcome of a generation attempt.
    ///
    /// Completions for anything other than the latest outstanding request
    /// id are stale and ignored. On success the request's subject, grade
    /// level and duration are echoed onto the plan before it is stored.
    pub fn complete(&mut self, request_id: u64, outcome: Result<LessonPlan>) {
        let request = match &self.state {
            SessionState::Loading {
                request_id: outstanding,
                request,
            } if *outstanding == request_id => request.clone(),
            _ => {
                warn!("Discarding stale completion for request {request_id}");
                return;
            }
        };

        self.state = match outcome {
            Ok(plan) => {
                info!("Generation request {request_id} succeeded");
                SessionState::Ready {
                    plan: plan.echo_request(&request),
                }
            }
            Err(e) => {
                warn!("Generation request {request_id} failed: {e}");
                SessionState::Failed {
                    message: failure_message(&e),
                }
            }
        };
    }

    /// Run one full generation round-trip: validate, prompt, generate,
    /// complete. At most one request is in flight at a time from this
    /// entry point.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - when the topic is empty; generator
    ///   failures are absorbed into the Failed state instead of propagating
    pub async fn submit(&mut self, request: &LessonRequest) -> Result<()> {
        let request_id = self.begin(request)?;
        let prompt = build_prompt(request);
        let outcome = self.generator.generate(&prompt).await;
        self.complete(request_id, outcome);
        Ok(())
    }

    /// Export the current plan into `dir`, returning the written path.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - when no plan is available
    /// * `PlannerError::FileSystem` - when the file cannot be written
    pub fn save(&self, dir: &std::path::Path) -> Result<std::path::PathBuf> {
        let plan = self.plan().ok_or_else(|| {
            PlannerError::invalid_input("session", "no generated plan available to save")
        })?;
        export::save_plan(plan, dir)
    }
}

/// Convert a generator-layer error into the user-facing failure message.
///
/// Generation failures carry a cause and keep the AI-communication
/// phrasing; anything else falls back to a generic message.
fn failure_message(error: &PlannerError) -> String {
    match error {
        PlannerError::Generation { message } => format!(
            "Failed to generate lesson plan: failed to communicate with the AI model \
             ({message}). Please check your API key and try again."
        ),
        _ => "An unknown error occurred.".to_string(),
    }
}
