// Help overlay: key bindings

use crate::tui::components::overlay::centered_rect;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BINDINGS: [(&str, &str); 9] = [
    ("Enter", "Ask the question"),
    ("Ctrl+Enter", "Ask the question"),
    ("Shift+Enter", "New line (Alt+Enter on older terminals)"),
    ("Esc, Ctrl+L", "Cancel and clear"),
    ("Tab", "Switch between question and answer"),
    ("↑↓ PgUp PgDn", "Scroll the answer"),
    ("Ctrl+Y", "Copy the last answer"),
    ("F1, ?", "Toggle this help"),
    ("Ctrl+C, Ctrl+Q", "Quit"),
];

pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
    let key_style = Style::default().fg(theme.border_focused);
    let desc_style = Style::default().fg(theme.fg);
    let header_style = Style::default()
        .fg(theme.title)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::styled("  Keys", header_style)),
    ];
    lines.extend(BINDINGS.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<16}", key), key_style),
            Span::styled(*desc, desc_style),
        ])
    }));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "  Esc to close",
        Style::default().fg(theme.muted),
    )));

    let height = lines.len() as u16 + 2;
    let help_area = centered_rect(66, height, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border_style(true))
        .title(" Help ")
        .style(Style::default().bg(theme.bg));

    f.render_widget(Clear, help_area);
    f.render_widget(Paragraph::new(Text::from(lines)).block(block), help_area);
}
