// Components module - UI building blocks
//
// Shell components rendered every frame:
// - Title bar: app name, busy spinner
// - Question input: text, counter, submit control
// - Response panel: waiting/working/answer + sources
// - Logs strip: recent log entries
// - Status bar: key hints
//
// Overlays drawn on top: loading overlay, toast.

pub mod logs_panel;
pub mod overlay;
pub mod question_input;
pub mod response_panel;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use question_input::QuestionInput;

use unicode_width::UnicodeWidthStr;

/// Rows needed to show `lines` soft-wrapped at `width` columns
///
/// Approximates ratatui's word wrap by display width; empty lines still take
/// one row.
pub fn wrapped_height(lines: &[&str], width: usize) -> usize {
    if width == 0 {
        return lines.len();
    }
    lines
        .iter()
        .map(|line| UnicodeWidthStr::width(*line).div_ceil(width).max(1))
        .sum()
}
