//! Request lifecycle controller
//!
//! Runs one question from validation to the settled state:
//!
//! ```text
//! idle ──submit──▶ validating ──ok──▶ in flight ──▶ answered ─┐
//!                     │                   ├──▶ fallback ─────┤
//!                     └─rejected          └──▶ cancelled ────┴──▶ idle
//! ```
//!
//! Busy is set when a submission is accepted and cleared by a drop guard, so
//! every path (including a dropped task) returns the surface to interactive.

use super::client::{AnswerService, QuestionRequest};
use super::demo::DemoResponder;
use super::display::ResponseRegion;
use super::error::{OracleError, ValidationError};
use super::notify::Notification;
use super::presenter::Presenter;
use super::question::Question;
use super::state::{lock_state, ApplicationState, CycleId, SharedState};
use super::surface::Surface;
use crate::config::GenerationOptions;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

pub const ANSWERED_MESSAGE: &str = "Question answered successfully!";
pub const FALLBACK_MESSAGE: &str = "Demonstration mode - answer service unavailable";
pub const CANCELLED_MESSAGE: &str = "Question cancelled";
pub const READY_MESSAGE: &str = "Ready for a new question";
pub const PROBING_MESSAGE: &str = "Checking connection to the Oracle...";
pub const CONNECTED_MESSAGE: &str = "Oracle connected and ready!";
pub const OFFLINE_MESSAGE: &str = "Demonstration mode active - answer service not connected";

/// How a submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Refused before anything changed
    Rejected(ValidationError),
    /// Another question was in flight; nothing happened
    Ignored,
    /// The service answered and the answer was rendered
    Answered,
    /// The service failed and a demo answer was rendered
    Fallback,
    /// A clear action aborted the cycle
    Cancelled,
}

struct Inner<S, U> {
    service: S,
    surface: U,
    state: SharedState,
    region: ResponseRegion,
    presenter: Presenter,
    demo: DemoResponder,
    options: GenerationOptions,
}

/// Orchestrates submissions, clears and the startup health probe
pub struct Controller<S, U> {
    inner: Arc<Inner<S, U>>,
}

impl<S, U> Clone for Controller<S, U> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Settles a cycle when dropped
struct Settle<'a, S, U: Surface> {
    inner: &'a Inner<S, U>,
}

impl<S, U: Surface> Drop for Settle<'_, S, U> {
    fn drop(&mut self) {
        lock_state(&self.inner.state).finish();
        self.inner.surface.set_busy(false);
    }
}

impl<S: AnswerService, U: Surface> Controller<S, U> {
    pub fn new(
        service: S,
        surface: U,
        options: GenerationOptions,
        typewriter_interval: Duration,
    ) -> Self {
        Self::with_demo(
            service,
            surface,
            options,
            typewriter_interval,
            DemoResponder::new(),
        )
    }

    /// Same as [`Controller::new`] with a specific demo responder
    pub fn with_demo(
        service: S,
        surface: U,
        options: GenerationOptions,
        typewriter_interval: Duration,
        demo: DemoResponder,
    ) -> Self {
        let state: SharedState = Arc::new(Mutex::new(ApplicationState::new()));
        let region = ResponseRegion::new();
        let presenter = Presenter::new(region.clone(), state.clone(), typewriter_interval);

        Self {
            inner: Arc::new(Inner {
                service,
                surface,
                state,
                region,
                presenter,
                demo,
                options,
            }),
        }
    }

    pub fn region(&self) -> &ResponseRegion {
        &self.inner.region
    }

    pub fn state(&self) -> &SharedState {
        &self.inner.state
    }

    pub fn surface(&self) -> &U {
        &self.inner.surface
    }

    pub fn is_busy(&self) -> bool {
        lock_state(&self.inner.state).busy
    }

    /// Ask one question and wait until its cycle settles
    pub async fn submit(&self, raw: &str) -> Outcome {
        let inner = &*self.inner;

        let question = match Question::parse(raw) {
            Ok(question) => question,
            Err(e) => {
                inner.surface.notify(Notification::error(e.to_string()));
                return Outcome::Rejected(e);
            }
        };

        let (cycle, token) = {
            let mut state = lock_state(&inner.state);
            if state.busy {
                tracing::debug!("Submission ignored: a question is already in flight");
                return Outcome::Ignored;
            }
            // Same lock as clear(), so a clear can never be overwritten by Working
            let started = state.begin(question.as_str());
            inner.region.show_working();
            started
        };
        let _settle = Settle { inner };

        tracing::info!(cycle, "Asking: {}", question);
        inner.surface.set_busy(true);

        let outcome = match self.ask(&question, &token).await {
            Ok(payload) => match inner.presenter.present(cycle, payload).await {
                Some(_) => Outcome::Answered,
                None => Outcome::Cancelled,
            },
            Err(e) if e.is_fallback() => {
                tracing::warn!(cycle, "Answer service failed, using demo answer: {}", e);
                let payload = inner.demo.synthesize(question.as_str());
                match inner.presenter.present(cycle, payload).await {
                    Some(_) => Outcome::Fallback,
                    None => Outcome::Cancelled,
                }
            }
            Err(_) => Outcome::Cancelled,
        };

        self.finish_cycle(cycle, outcome)
    }

    async fn ask(
        &self,
        question: &Question,
        token: &CancellationToken,
    ) -> Result<super::payload::AnswerPayload, OracleError> {
        let request = QuestionRequest::new(question, self.inner.options.clone());
        tokio::select! {
            biased;
            _ = token.cancelled() => Err(OracleError::Cancelled),
            result = self.inner.service.ask(&request) => result,
        }
    }

    /// Pick the closing notification; a cycle cleared mid-render counts as cancelled
    fn finish_cycle(&self, cycle: CycleId, outcome: Outcome) -> Outcome {
        let current = lock_state(&self.inner.state).is_current(cycle);
        let outcome = if current { outcome } else { Outcome::Cancelled };

        let notification = match outcome {
            Outcome::Answered => Notification::success(ANSWERED_MESSAGE),
            Outcome::Fallback => Notification::warning(FALLBACK_MESSAGE),
            _ => Notification::info(CANCELLED_MESSAGE),
        };
        self.inner.surface.notify(notification);
        outcome
    }

    /// Abort the in-flight request and return the display to waiting
    pub fn clear(&self) {
        let inner = &*self.inner;
        {
            // Region reset happens under the state lock so a presenter
            // cannot open a block in between
            let mut state = lock_state(&inner.state);
            state.reset();
            inner.region.show_waiting();
        }
        tracing::debug!("Display cleared");
        inner.surface.notify(Notification::info(READY_MESSAGE));
    }

    /// Startup connectivity check; the result is only reported, never blocking
    pub async fn probe_health(&self) -> bool {
        let inner = &*self.inner;
        inner.surface.set_overlay(Some(PROBING_MESSAGE));

        let healthy = match inner.service.health().await {
            Ok(()) => {
                inner.surface.notify(Notification::success(CONNECTED_MESSAGE));
                true
            }
            Err(e) => {
                tracing::warn!("Health check failed: {}", e);
                inner.surface.notify(Notification::warning(OFFLINE_MESSAGE));
                false
            }
        };

        inner.surface.set_overlay(None);
        healthy
    }
}
