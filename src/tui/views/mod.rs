// Views module - screen-level rendering logic
//
// One screen: title, question input, response panel, logs strip, status bar,
// with the help overlay, loading overlay and toast drawn on top.

mod help;

use super::app::{App, Focus};
use super::components::{
    logs_panel, overlay, question_input, response_panel, status_bar, title_bar, toast,
};
use super::surface::lock_screen;
use crate::oracle::AnswerService;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::Block;
use ratatui::Frame;
use std::time::Instant;

/// Visible rows of the logs strip (plus borders)
const LOG_ROWS: u16 = 4;
/// Smallest terminal that still gets the logs strip
const LOGS_MIN_HEIGHT: u16 = 24;
const LOGS_MIN_WIDTH: u16 = 60;

fn logs_height(width: u16, height: u16) -> u16 {
    if height >= LOGS_MIN_HEIGHT && width >= LOGS_MIN_WIDTH {
        LOG_ROWS + 2
    } else {
        0
    }
}

/// Main UI render function - called on every frame
pub fn draw<S: AnswerService>(f: &mut Frame, app: &mut App<S>) {
    let area = f.area();
    f.render_widget(Block::default().style(app.theme.base_style()), area);

    // Small terminals lose the logs strip first
    let logs_rows = logs_height(area.width, area.height);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Title
            Constraint::Length(7),           // Question input
            Constraint::Min(6),              // Response panel
            Constraint::Length(logs_rows),   // Logs strip
            Constraint::Length(3),           // Status bar
        ])
        .split(area);

    let busy = app.is_busy();
    let spinner = app.spinner_char();

    title_bar::render(f, chunks[0], app);
    question_input::render(
        f,
        chunks[1],
        &app.input,
        &app.theme,
        app.focus == Focus::Input,
        busy,
    );

    app.answer_area = chunks[2];
    let view = app.controller.region().view();
    response_panel::render(
        f,
        chunks[2],
        &view,
        &app.theme,
        app.focus == Focus::Answer,
        app.answer_scroll,
        spinner,
    );

    if logs_rows > 0 {
        let entries = app.log_buffer.recent(LOG_ROWS as usize);
        logs_panel::render(f, chunks[3], &entries, &app.theme);
    }
    status_bar::render(f, chunks[4], app);

    // Overlays, bottom to top
    if app.show_help {
        help::render(f, area, &app.theme);
    }

    let screen = lock_screen(&app.screen);
    if let Some(message) = &screen.overlay {
        overlay::render(f, area, message, spinner, &app.theme);
    }
    if let Some((notification, phase)) = screen.notifier.visible(Instant::now()) {
        toast::render(f, area, notification, phase, &app.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logs_strip_needs_room() {
        assert_eq!(logs_height(80, 24), LOG_ROWS + 2);
        assert_eq!(logs_height(80, 23), 0);
        assert_eq!(logs_height(59, 40), 0);
    }
}
