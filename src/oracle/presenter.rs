//! Response presenter
//!
//! Turns an answer payload into display content: a fresh answer block, typed
//! out character by character, followed by the static source list.

use super::display::ResponseRegion;
use super::payload::{Answer, AnswerPayload};
use super::state::{lock_state, CycleId, SharedState};
use super::typewriter;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Presenter {
    region: ResponseRegion,
    state: SharedState,
    interval: Duration,
}

impl Presenter {
    pub fn new(region: ResponseRegion, state: SharedState, interval: Duration) -> Self {
        Self {
            region,
            state,
            interval,
        }
    }

    /// Render `payload` and wait for the animation to finish
    ///
    /// Returns `None` without touching the display when `cycle` was cleared
    /// before rendering started. The answer text is stored as the last answer
    /// of `cycle`, unless the cycle was cleared while it was being typed.
    pub async fn present(&self, cycle: CycleId, payload: AnswerPayload) -> Option<Answer> {
        let answer = payload.into_answer();

        // Opening the block under the state lock keeps it ordered with a clear
        let block = {
            let state = lock_state(&self.state);
            if !state.is_current(cycle) {
                tracing::debug!("Cycle {} was cleared before rendering", cycle);
                return None;
            }
            self.region.open_answer()
        };
        typewriter::reveal(&block, &answer.text, self.interval).await;

        if !answer.sources.is_empty() {
            block.set_sources(answer.sources.clone());
        }

        if !lock_state(&self.state).record_answer(cycle, &answer.text) {
            tracing::debug!("Cycle {} was cleared during rendering", cycle);
        }

        Some(answer)
    }
}
