// Title bar component
//
// Renders the app title with a spinner while a question is in flight.

use crate::oracle::AnswerService;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render<S: AnswerService>(f: &mut Frame, area: Rect, app: &App<S>) {
    let activity = if app.is_busy() {
        format!(" {} consulting", app.spinner_char())
    } else {
        String::new()
    };

    let title = Paragraph::new(format!(" 🔮 The Oracle{}", activity))
        .style(app.theme.title_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(" F1 help ").right_aligned()),
        );

    f.render_widget(title, area);
}
