//! Response panel component
//!
//! Renders the answer region: the waiting message, the working indicator, or
//! the answer being typed with its source list underneath. All text goes out
//! as plain spans, so nothing in an answer is interpreted as markup.

use super::wrapped_height;
use crate::oracle::display::{WAITING_MESSAGE, WORKING_MESSAGE};
use crate::oracle::{BlockSnapshot, RegionView};
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Replace control characters that would corrupt the terminal
///
/// Newlines are kept, tabs become four spaces, anything else in the control
/// range becomes U+FFFD.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\n' => out.push('\n'),
            '\t' => out.push_str("    "),
            c if c.is_control() => out.push(char::REPLACEMENT_CHARACTER),
            c => out.push(c),
        }
    }
    out
}

/// Lines of an answer block: text, typing cursor, then sources
pub fn answer_lines(snapshot: &BlockSnapshot, theme: &Theme) -> Vec<Line<'static>> {
    let text = sanitize(&snapshot.text);
    let mut lines: Vec<Line<'static>> = text
        .split('\n')
        .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(theme.answer))))
        .collect();

    if snapshot.typing {
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled(
                "▌",
                Style::default()
                    .fg(theme.cursor)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }
    }

    if !snapshot.sources.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "📚 Sources",
            Style::default()
                .fg(theme.source)
                .add_modifier(Modifier::BOLD),
        )));
        for source in &snapshot.sources {
            lines.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(theme.muted)),
                Span::styled(sanitize(source), Style::default().fg(theme.source)),
            ]));
        }
    }

    lines
}

/// Largest useful scroll offset for `snapshot` in a panel of `area`
pub fn max_scroll(snapshot: &BlockSnapshot, area: Rect) -> u16 {
    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;

    let text = sanitize(&snapshot.text);
    let mut logical: Vec<String> = text.split('\n').map(str::to_string).collect();
    if !snapshot.sources.is_empty() {
        logical.push(String::new());
        logical.push("📚 Sources".to_string());
        logical.extend(snapshot.sources.iter().map(|s| format!("  • {}", sanitize(s))));
    }
    let refs: Vec<&str> = logical.iter().map(String::as_str).collect();

    wrapped_height(&refs, inner_width).saturating_sub(inner_height) as u16
}

/// Render the response region
pub fn render(
    f: &mut Frame,
    area: Rect,
    view: &RegionView,
    theme: &Theme,
    focused: bool,
    scroll: u16,
    spinner: char,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border_style(focused))
        .title(" The Oracle speaks ");

    let paragraph = match view {
        RegionView::Waiting => Paragraph::new(Text::from(vec![
            Line::raw(""),
            Line::from(Span::styled(
                format!("🔮 {}", WAITING_MESSAGE),
                Style::default().fg(theme.muted),
            )),
        ]))
        .alignment(Alignment::Center),
        RegionView::Working => Paragraph::new(Text::from(vec![
            Line::raw(""),
            Line::from(Span::styled(
                format!("{} {}", spinner, WORKING_MESSAGE),
                Style::default()
                    .fg(theme.border_focused)
                    .add_modifier(Modifier::BOLD),
            )),
        ]))
        .alignment(Alignment::Center),
        RegionView::Answer(snapshot) => {
            let scroll = scroll.min(max_scroll(snapshot, area));
            Paragraph::new(Text::from(answer_lines(snapshot, theme)))
                .wrap(Wrap { trim: false })
                .scroll((scroll, 0))
        }
    };

    f.render_widget(paragraph.block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_sanitize_keeps_newlines_and_replaces_controls() {
        assert_eq!(sanitize("a\nb"), "a\nb");
        assert_eq!(sanitize("a\tb"), "a    b");
        assert_eq!(sanitize("\x1b[31mred"), "\u{FFFD}[31mred");
        assert_eq!(sanitize("<b>bold</b>"), "<b>bold</b>");
    }

    #[test]
    fn test_answer_lines_with_sources_in_order() {
        let snapshot = BlockSnapshot {
            text: "Paris.".to_string(),
            typing: false,
            sources: vec!["geo.pdf".to_string(), "atlas.txt".to_string()],
        };
        let lines = answer_lines(&snapshot, &Theme::default());
        let rendered: Vec<String> = lines.iter().map(plain).collect();
        assert_eq!(
            rendered,
            vec!["Paris.", "", "📚 Sources", "  • geo.pdf", "  • atlas.txt"]
        );
    }

    #[test]
    fn test_typing_cursor_only_while_typing() {
        let mut snapshot = BlockSnapshot {
            text: "Par".to_string(),
            typing: true,
            sources: Vec::new(),
        };
        let lines = answer_lines(&snapshot, &Theme::default());
        assert_eq!(plain(&lines[0]), "Par▌");

        snapshot.typing = false;
        let lines = answer_lines(&snapshot, &Theme::default());
        assert_eq!(lines.len(), 1);
        assert_eq!(plain(&lines[0]), "Par");
    }

    #[test]
    fn test_max_scroll() {
        let snapshot = BlockSnapshot {
            text: "line\n".repeat(20),
            typing: false,
            sources: Vec::new(),
        };
        // 21 logical lines, 8 visible rows
        assert_eq!(max_scroll(&snapshot, Rect::new(0, 0, 40, 10)), 13);
        assert_eq!(max_scroll(&BlockSnapshot::default(), Rect::new(0, 0, 40, 10)), 0);
    }
}
