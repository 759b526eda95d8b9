// Status bar component
//
// Key hints plus the answer service address.

use crate::oracle::AnswerService;
use crate::tui::app::{App, Focus};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Below this width only the bare keys fit
const LABELLED_MIN_WIDTH: u16 = 72;
/// From this width the service URL and uptime are shown too
const FULL_MIN_WIDTH: u16 = 110;

/// Which hint set fits in `width` columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hints {
    Keys,
    Labelled,
    Full,
}

impl Hints {
    fn for_width(width: u16) -> Self {
        if width < LABELLED_MIN_WIDTH {
            Hints::Keys
        } else if width < FULL_MIN_WIDTH {
            Hints::Labelled
        } else {
            Hints::Full
        }
    }
}

/// Render the status bar
///
/// Adapts to terminal width:
/// - Wide: hints with labels and the service URL
/// - Narrow: keys only
pub fn render<S: AnswerService>(f: &mut Frame, area: Rect, app: &App<S>) {
    let scroll_hint = match app.focus {
        Focus::Answer => " │ ↑↓ scroll",
        Focus::Input => "",
    };

    let status_text = match Hints::for_width(area.width) {
        Hints::Keys => format!(" ⏎ ask │ Esc clear │ Tab │ ^Q{}", scroll_hint),
        Hints::Labelled => format!(
            " ⏎ ask │ ⇧⏎ newline │ Esc clear │ Tab focus │ ^Y copy │ ^Q quit{}",
            scroll_hint
        ),
        Hints::Full => format!(
            " ⏎ ask │ ⇧⏎ newline │ Esc clear │ Tab focus │ ^Y copy │ ^Q quit{} │ {} │ {}",
            scroll_hint,
            app.service_url,
            app.uptime()
        ),
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        );

    f.render_widget(status, area);
}
