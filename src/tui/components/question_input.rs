//! Question input component
//!
//! Owns the text being typed, the live character counter and the submit
//! control (label swaps to "Consulting…" while a question is in flight).

use super::wrapped_height;
use crate::oracle::Question;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Counter turns to the warning color above this many characters
pub const COUNTER_WARN: usize = 700;
/// Counter turns to the danger color above this many characters
pub const COUNTER_DANGER: usize = 900;

pub const SUBMIT_LABEL: &str = "Ask the Oracle";
pub const BUSY_LABEL: &str = "Consulting…";

const PLACEHOLDER: &str = "Type your question (at least 10 characters)...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Warn,
    Danger,
}

/// Text buffer of the question input
#[derive(Debug, Default, Clone)]
pub struct QuestionInput {
    text: String,
}

impl QuestionInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn insert_char(&mut self, ch: char) {
        self.text.push(ch);
    }

    pub fn insert_newline(&mut self) {
        self.text.push('\n');
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Characters typed so far, whitespace included
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Color band of the counter; never blocks typing
    pub fn counter_level(&self) -> CounterLevel {
        match self.char_count() {
            n if n > COUNTER_DANGER => CounterLevel::Danger,
            n if n > COUNTER_WARN => CounterLevel::Warn,
            _ => CounterLevel::Normal,
        }
    }

    /// Submit control is enabled iff the trimmed text is long enough and
    /// nothing is in flight
    pub fn can_submit(&self, busy: bool) -> bool {
        !busy && Question::is_acceptable(&self.text)
    }
}

/// Render the input box with its counter and submit control
pub fn render(
    f: &mut Frame,
    area: Rect,
    input: &QuestionInput,
    theme: &Theme,
    focused: bool,
    busy: bool,
) {
    let counter_color = match input.counter_level() {
        CounterLevel::Normal => theme.counter,
        CounterLevel::Warn => theme.counter_warn,
        CounterLevel::Danger => theme.counter_danger,
    };
    let counter = Line::from(Span::styled(
        format!(" {} chars ", input.char_count()),
        Style::default().fg(counter_color),
    ))
    .right_aligned();

    let submit = if busy {
        Span::styled(
            format!(" ⏳ {} ", BUSY_LABEL),
            Style::default().fg(theme.muted),
        )
    } else if input.can_submit(busy) {
        Span::styled(
            format!(" ⏎ {} ", SUBMIT_LABEL),
            Style::default()
                .fg(theme.border_focused)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!(" ⏎ {} ", SUBMIT_LABEL),
            Style::default().fg(theme.muted),
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border_style(focused && !busy))
        .title(" Your question ")
        .title_bottom(Line::from(submit))
        .title_bottom(counter);

    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;

    let text = if input.text().is_empty() && !focused {
        Text::from(Span::styled(PLACEHOLDER, Style::default().fg(theme.muted)))
    } else {
        let mut lines: Vec<Line> = input
            .text()
            .split('\n')
            .map(|line| Line::from(line.to_string()))
            .collect();
        if focused && !busy {
            if let Some(last) = lines.last_mut() {
                last.push_span(Span::styled("▏", Style::default().fg(theme.cursor)));
            }
        }
        Text::from(lines)
    };

    // Keep the end of the text (where the cursor is) in view
    let logical: Vec<&str> = input.text().split('\n').collect();
    let height = wrapped_height(&logical, inner_width);
    let scroll = height.saturating_sub(inner_height) as u16;

    let style = if busy {
        Style::default().fg(theme.muted)
    } else {
        Style::default().fg(theme.fg)
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(block);

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(text: &str) -> QuestionInput {
        let mut input = QuestionInput::new();
        for ch in text.chars() {
            input.insert_char(ch);
        }
        input
    }

    #[test]
    fn test_counter_levels() {
        assert_eq!(input(&"a".repeat(700)).counter_level(), CounterLevel::Normal);
        assert_eq!(input(&"a".repeat(701)).counter_level(), CounterLevel::Warn);
        assert_eq!(input(&"a".repeat(900)).counter_level(), CounterLevel::Warn);
        assert_eq!(input(&"a".repeat(901)).counter_level(), CounterLevel::Danger);
    }

    #[test]
    fn test_counter_never_blocks_typing() {
        let mut long = input(&"a".repeat(1200));
        long.insert_char('b');
        assert_eq!(long.char_count(), 1201);
    }

    #[test]
    fn test_can_submit() {
        assert!(!input("too short").can_submit(false));
        assert!(!input("   short   ").can_submit(false));
        assert!(input("short text").can_submit(false));
        assert!(!input("short text").can_submit(true));
    }

    #[test]
    fn test_editing() {
        let mut text = input("héllo");
        text.insert_newline();
        text.insert_char('x');
        assert_eq!(text.text(), "héllo\nx");
        assert_eq!(text.char_count(), 7);

        text.backspace();
        text.backspace();
        assert_eq!(text.text(), "héllo");

        text.clear();
        assert_eq!(text.char_count(), 0);
    }
}
