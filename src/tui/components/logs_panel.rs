//! Logs strip component
//!
//! Shows the most recent entries of the in-memory log buffer.

use crate::logging::LogEntry;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// One log entry as a single display line
pub fn entry_line(entry: &LogEntry, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{} ", entry.timestamp.format("%H:%M:%S")),
            Style::default().fg(theme.muted),
        ),
        Span::styled(
            format!("{:<5} ", entry.level.as_str()),
            Style::default().fg(theme.log_color(entry.level)),
        ),
        Span::styled(
            entry.message.replace('\n', " "),
            Style::default().fg(theme.fg),
        ),
    ])
}

/// Render the last `area.height - 2` entries (most recent at the bottom)
pub fn render(f: &mut Frame, area: Rect, entries: &[LogEntry], theme: &Theme) {
    let visible = area.height.saturating_sub(2) as usize;
    let skip = entries.len().saturating_sub(visible);

    let items: Vec<ListItem> = entries
        .iter()
        .skip(skip)
        .map(|entry| ListItem::new(entry_line(entry, theme)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(" Logs "),
    );

    f.render_widget(list, area);
}
