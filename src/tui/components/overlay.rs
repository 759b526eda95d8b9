//! Loading overlay shown while the startup health probe runs

use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Calculate centered rect for an overlay box
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

pub fn render(f: &mut Frame, area: Rect, message: &str, spinner: char, theme: &Theme) {
    let width = UnicodeWidthStr::width(message) as u16 + 8;
    let overlay_area = centered_rect(width, 5, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border_style(true))
        .style(Style::default().bg(theme.bg));

    let text = Text::from(vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled(
                format!("{} ", spinner),
                Style::default()
                    .fg(theme.border_focused)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(message, Style::default().fg(theme.fg)),
        ]),
    ]);

    f.render_widget(Clear, overlay_area);
    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(block),
        overlay_area,
    );
}
