//! Toast notification component
//!
//! Draws the notifier's current message in the top-right corner, on top of
//! all other content. Slides in from the right edge and back out again.

use crate::oracle::{Notification, Phase};
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Where the toast goes for a given slide fraction; `None` when off-screen
pub fn toast_area(area: Rect, notification: &Notification, visibility: f32) -> Option<Rect> {
    // icon + space + message, 2 cells padding each side, plus borders
    let content = UnicodeWidthStr::width(notification.message.as_str()) as u16 + 2;
    let width = (content + 4).min(area.width.saturating_sub(4));
    let height = 3; // 1 line of text + 2 for borders

    // Fully shown: offset by 2 cells from the right edge
    let resting_x = area.right().saturating_sub(width + 2);
    let hidden = ((1.0 - visibility.clamp(0.0, 1.0)) * (width + 2) as f32) as u16;
    let x = resting_x.saturating_add(hidden);
    let visible_width = width.min(area.right().saturating_sub(x));

    if visible_width < 3 {
        return None;
    }
    Some(Rect::new(x, area.y + 1, visible_width, height.min(area.height)))
}

/// Render the toast
///
/// Uses `Clear` widget to ensure toast is visible on top of other content.
pub fn render(f: &mut Frame, area: Rect, notification: &Notification, phase: Phase, theme: &Theme) {
    let Some(toast_area) = toast_area(area, notification, phase.visibility()) else {
        return;
    };

    let color = theme.severity_color(notification.severity);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(theme.bg));

    let line = Line::from(vec![
        Span::styled(
            format!("{} ", notification.severity.icon()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(notification.message.as_str(), Style::default().fg(theme.fg)),
    ]);

    let text = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(block);

    // Clear the area first so toast appears on top
    f.render_widget(Clear, toast_area);
    f.render_widget(text, toast_area);
}
