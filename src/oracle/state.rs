//! Application state for the request lifecycle
//!
//! One record per process, owned by the controller. The UI reads `busy` to
//! gate input; only the controller mutates. Each accepted submission opens a
//! new cycle; a clear action bumps the cycle so late results from the old one
//! can be recognized and dropped.

use std::sync::{Arc, Mutex, MutexGuard};
use tokio_util::sync::CancellationToken;

/// Identifies one accepted submission
pub type CycleId = u64;

#[derive(Debug, Default)]
pub struct ApplicationState {
    /// True from acceptance until the cycle settles
    pub busy: bool,
    /// Trimmed text of the question being (or last) asked
    pub current_question: String,
    /// Text of the last answer rendered to completion
    pub last_answer: String,
    /// Handle for aborting the in-flight request
    pub cancel: Option<CancellationToken>,
    cycle: CycleId,
}

impl ApplicationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a submission: mark busy, store the question, hand out a fresh
    /// cancellation handle. A leftover handle is cancelled first.
    pub fn begin(&mut self, question: &str) -> (CycleId, CancellationToken) {
        if let Some(previous) = self.cancel.take() {
            previous.cancel();
        }
        let token = CancellationToken::new();
        self.busy = true;
        self.current_question = question.to_string();
        self.cancel = Some(token.clone());
        self.cycle += 1;
        (self.cycle, token)
    }

    /// Settle a cycle: not busy, no handle
    pub fn finish(&mut self) {
        self.busy = false;
        self.cancel = None;
    }

    /// Record a rendered answer unless the cycle was cleared meanwhile
    pub fn record_answer(&mut self, cycle: CycleId, answer: &str) -> bool {
        if self.cycle != cycle {
            return false;
        }
        self.last_answer = answer.to_string();
        true
    }

    pub fn is_current(&self, cycle: CycleId) -> bool {
        self.cycle == cycle
    }

    /// Clear action: abort the in-flight request and forget question/answer.
    /// `busy` is left alone; the aborted cycle settles on its own.
    pub fn reset(&mut self) {
        if let Some(token) = &self.cancel {
            token.cancel();
        }
        self.current_question.clear();
        self.last_answer.clear();
        self.cycle += 1;
    }
}

/// Shared state wrapped for access from the UI and the request task
pub type SharedState = Arc<Mutex<ApplicationState>>;

pub(crate) fn lock_state(state: &SharedState) -> MutexGuard<'_, ApplicationState> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_marks_busy_and_hands_out_token() {
        let mut state = ApplicationState::new();
        let (cycle, token) = state.begin("short text");
        assert!(state.busy);
        assert_eq!(state.current_question, "short text");
        assert!(state.is_current(cycle));
        assert!(!token.is_cancelled());

        state.finish();
        assert!(!state.busy);
        assert!(state.cancel.is_none());
    }

    #[test]
    fn test_begin_cancels_a_leftover_handle() {
        let mut state = ApplicationState::new();
        let (_, first) = state.begin("first question");
        let (_, second) = state.begin("second question");
        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
    }

    #[test]
    fn test_reset_cancels_and_invalidates_cycle() {
        let mut state = ApplicationState::new();
        let (cycle, token) = state.begin("short text");
        state.reset();

        assert!(token.is_cancelled());
        assert!(state.current_question.is_empty());
        assert!(!state.is_current(cycle));
        assert!(!state.record_answer(cycle, "late"));
        assert!(state.last_answer.is_empty());
        // Still busy until the aborted cycle settles
        assert!(state.busy);
    }

    #[test]
    fn test_record_answer_for_current_cycle() {
        let mut state = ApplicationState::new();
        let (cycle, _) = state.begin("short text");
        assert!(state.record_answer(cycle, "Paris."));
        assert_eq!(state.last_answer, "Paris.");
    }
}
