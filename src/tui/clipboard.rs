//! Ctrl+Y: put the last rendered answer on the system clipboard

use crate::oracle::state::{lock_state, SharedState};
use anyhow::{Context, Result};
use arboard::Clipboard;

/// What a copy request did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Copied {
    /// No answer has been rendered since the last clear
    Nothing,
    /// The answer went to the clipboard; its length in chars
    Answer(usize),
}

/// Copy the last answer recorded in `state`
///
/// The clipboard is only opened when there is something to copy. It fails
/// without a display server (headless Linux) or when access is denied.
pub fn copy_last_answer(state: &SharedState) -> Result<Copied> {
    // Released before the clipboard call, which may block
    let answer = lock_state(state).last_answer.clone();
    if answer.is_empty() {
        return Ok(Copied::Nothing);
    }

    let chars = answer.chars().count();
    Clipboard::new()
        .context("Failed to access clipboard")?
        .set_text(answer)
        .context("Failed to set clipboard text")?;
    Ok(Copied::Answer(chars))
}
