//! Response display region
//!
//! Shared model of the answer area. The controller and presenter write to it,
//! the TUI reads a snapshot every frame. An answer lives in an [`AnswerBlock`]
//! handle; replacing the region content detaches the old block, so late
//! writes through a stale handle land in a block nobody renders.

use std::sync::{Arc, Mutex, MutexGuard};

/// Shown while idle
pub const WAITING_MESSAGE: &str = "The Oracle awaits your question...";

/// Shown while a request is in flight
pub const WORKING_MESSAGE: &str = "The Oracle is consulting the documents...";

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

#[derive(Debug, Default)]
struct BlockState {
    text: String,
    typing: bool,
    sources: Vec<String>,
    detached: bool,
}

/// Handle to one answer container in the region
#[derive(Debug, Clone, Default)]
pub struct AnswerBlock {
    inner: Arc<Mutex<BlockState>>,
}

/// Point-in-time copy of an answer block for rendering
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockSnapshot {
    pub text: String,
    pub typing: bool,
    pub sources: Vec<String>,
}

impl AnswerBlock {
    pub fn push_char(&self, ch: char) {
        lock(&self.inner).text.push(ch);
    }

    pub fn push_str(&self, s: &str) {
        lock(&self.inner).text.push_str(s);
    }

    /// Toggle the "in progress" marker (blinking cursor in the TUI)
    pub fn set_typing(&self, typing: bool) {
        lock(&self.inner).typing = typing;
    }

    /// Attach the static source list below the text
    pub fn set_sources(&self, sources: Vec<String>) {
        lock(&self.inner).sources = sources;
    }

    /// True once the region moved on to other content
    pub fn is_detached(&self) -> bool {
        lock(&self.inner).detached
    }

    pub fn text(&self) -> String {
        lock(&self.inner).text.clone()
    }

    pub fn snapshot(&self) -> BlockSnapshot {
        let state = lock(&self.inner);
        BlockSnapshot {
            text: state.text.clone(),
            typing: state.typing,
            sources: state.sources.clone(),
        }
    }

    fn detach(&self) {
        lock(&self.inner).detached = true;
    }
}

#[derive(Debug, Default)]
enum RegionContent {
    #[default]
    Waiting,
    Working,
    Answer(AnswerBlock),
}

/// What the region currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionView {
    Waiting,
    Working,
    Answer(BlockSnapshot),
}

/// The answer area, shared between the controller and the renderer
#[derive(Debug, Clone, Default)]
pub struct ResponseRegion {
    content: Arc<Mutex<RegionContent>>,
}

impl ResponseRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to the idle message
    pub fn show_waiting(&self) {
        self.replace(RegionContent::Waiting);
    }

    /// Show the in-flight indicator
    pub fn show_working(&self) {
        self.replace(RegionContent::Working);
    }

    /// Clear the region and insert a fresh, empty answer block
    pub fn open_answer(&self) -> AnswerBlock {
        let block = AnswerBlock::default();
        self.replace(RegionContent::Answer(block.clone()));
        block
    }

    pub fn view(&self) -> RegionView {
        match &*lock(&self.content) {
            RegionContent::Waiting => RegionView::Waiting,
            RegionContent::Working => RegionView::Working,
            RegionContent::Answer(block) => RegionView::Answer(block.snapshot()),
        }
    }

    fn replace(&self, next: RegionContent) {
        let previous = std::mem::replace(&mut *lock(&self.content), next);
        if let RegionContent::Answer(block) = previous {
            block.detach();
        }
    }
}
