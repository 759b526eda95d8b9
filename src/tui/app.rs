// TUI application state
//
// Binds key events to the controller and holds the UI-only state: the
// question being typed, which panel has focus, answer scroll, help overlay.
// Submissions run as spawned tasks; the draw loop reads their progress from
// the shared response region and screen model.

use super::clipboard::{self, Copied};
use super::components::{response_panel, QuestionInput};
use super::input::KeyGate;
use super::surface::{lock_screen, SharedScreen, TuiSurface};
use super::theme::{Theme, ThemeKind};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::oracle::{AnswerService, Controller, Notification, RegionView, Surface};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Spinner frames for busy indicators
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Panel that receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Answer,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Input => Focus::Answer,
            Focus::Answer => Focus::Input,
        }
    }
}

/// Main application state for the TUI
pub struct App<S: AnswerService> {
    pub controller: Controller<S, TuiSurface>,
    pub screen: SharedScreen,
    pub input: QuestionInput,
    pub focus: Focus,
    /// Scroll offset of the answer panel
    pub answer_scroll: u16,
    /// Last drawn answer panel area, for scroll bounds
    pub answer_area: Rect,
    pub show_help: bool,
    pub should_quit: bool,
    pub theme: Theme,
    pub log_buffer: LogBuffer,
    /// Shown in the status bar
    pub service_url: String,
    /// When the app started (for uptime display)
    pub start_time: Instant,
    /// Current spinner frame
    animation_frame: usize,
    /// Debounce and repeat for non-text keys
    keys: KeyGate,
}

impl<S: AnswerService> App<S> {
    pub fn new(
        controller: Controller<S, TuiSurface>,
        screen: SharedScreen,
        log_buffer: LogBuffer,
        config: &Config,
    ) -> Self {
        Self {
            controller,
            screen,
            input: QuestionInput::new(),
            focus: Focus::Input,
            answer_scroll: 0,
            answer_area: Rect::default(),
            show_help: false,
            should_quit: false,
            theme: ThemeKind::from_name(&config.ui.theme).theme(),
            log_buffer,
            service_url: config.api.ask_url(),
            start_time: Instant::now(),
            animation_frame: 0,
            keys: KeyGate::new(),
        }
    }

    /// Busy as last reported through the surface; gates input and the submit label
    pub fn is_busy(&self) -> bool {
        lock_screen(&self.screen).busy
    }

    /// Advance the spinner and drop expired notifications
    pub fn tick_animation(&mut self) {
        self.animation_frame = (self.animation_frame + 1) % SPINNER.len();
        lock_screen(&self.screen).notifier.prune(Instant::now());
    }

    pub fn spinner_char(&self) -> char {
        SPINNER[self.animation_frame]
    }

    /// Format uptime as "1h 23m 45s" or "5m 12s" or "34s"
    pub fn uptime(&self) -> String {
        format_duration(self.start_time.elapsed())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────────────────

    /// Run the startup health probe in the background
    pub fn start_health_probe(&self) {
        let controller = self.controller.clone();
        tokio::spawn(async move {
            controller.probe_health().await;
        });
    }

    /// Submit the typed question; ignored while busy
    pub fn submit(&mut self) {
        if self.is_busy() {
            return;
        }
        let text = self.input.text().to_string();
        let controller = self.controller.clone();
        self.answer_scroll = 0;
        tokio::spawn(async move {
            controller.submit(&text).await;
        });
    }

    /// Abort, reset the display, empty the input and refocus it
    pub fn clear(&mut self) {
        self.controller.clear();
        self.input.clear();
        self.focus = Focus::Input;
        self.answer_scroll = 0;
    }

    /// Copy the last rendered answer to the clipboard
    pub fn copy_answer(&self) {
        let surface = self.controller.surface();
        match clipboard::copy_last_answer(self.controller.state()) {
            Ok(Copied::Nothing) => surface.notify(Notification::info("No answer to copy yet")),
            Ok(Copied::Answer(chars)) => {
                tracing::debug!("Copied {} chars to the clipboard", chars);
                surface.notify(Notification::success("Answer copied to clipboard"));
            }
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                surface.notify(Notification::error("Failed to copy to clipboard"));
            }
        }
    }

    fn max_answer_scroll(&self) -> u16 {
        match self.controller.region().view() {
            RegionView::Answer(snapshot) => response_panel::max_scroll(&snapshot, self.answer_area),
            _ => 0,
        }
    }

    fn page_height(&self) -> u16 {
        self.answer_area.height.saturating_sub(2).max(1)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Key dispatch: Global → Help overlay → Actions → Focused panel
    // ─────────────────────────────────────────────────────────────────────

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            self.keys.release(key.code);
            return;
        }

        if self.handle_global_keys(&key) {
            return;
        }

        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Enter
            ) && self.keys.press(key.code)
            {
                self.show_help = false;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.clear(),
            KeyCode::F(1) => {
                if self.keys.press(key.code) {
                    self.show_help = true;
                }
            }
            KeyCode::Tab | KeyCode::BackTab => {
                if self.keys.press(key.code) {
                    self.focus = self.focus.toggle();
                }
            }
            KeyCode::Enter => {
                if key.modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) {
                    if self.focus == Focus::Input && !self.is_busy() {
                        self.input.insert_newline();
                    }
                } else {
                    self.submit();
                }
            }
            _ => match self.focus {
                Focus::Input => self.edit_input(&key),
                Focus::Answer => self.handle_answer_key(&key),
            },
        }
    }

    /// Ctrl shortcuts that work everywhere; returns true if handled
    fn handle_global_keys(&mut self, key: &KeyEvent) -> bool {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('l') => {
                self.clear();
                true
            }
            KeyCode::Char('y') => {
                if self.keys.press(key.code) {
                    self.copy_answer();
                }
                true
            }
            // Ctrl+Enter submits like plain Enter
            KeyCode::Enter => {
                self.submit();
                true
            }
            _ => false,
        }
    }

    /// Typing into the question; the input is inert while busy
    fn edit_input(&mut self, key: &KeyEvent) {
        if self.is_busy() {
            return;
        }
        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.input.insert_char(ch)
            }
            KeyCode::Backspace => self.input.backspace(),
            _ => {}
        }
    }

    fn handle_answer_key(&mut self, key: &KeyEvent) {
        let code = key.code;
        match code {
            KeyCode::Char('?') => {
                if self.keys.press(code) {
                    self.show_help = true;
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown | KeyCode::Home
            | KeyCode::End => {
                if !self.keys.press(code) {
                    return;
                }
                let max = self.max_answer_scroll();
                let page = self.page_height();
                self.answer_scroll = match code {
                    KeyCode::Up => self.answer_scroll.saturating_sub(1),
                    KeyCode::Down => self.answer_scroll.saturating_add(1),
                    KeyCode::PageUp => self.answer_scroll.saturating_sub(page),
                    KeyCode::PageDown => self.answer_scroll.saturating_add(page),
                    KeyCode::Home => 0,
                    _ => max,
                }
                .min(max);
            }
            // Typing while the answer has focus goes back to the question
            KeyCode::Char(_) | KeyCode::Backspace => {
                self.focus = Focus::Input;
                self.edit_input(key);
            }
            _ => {}
        }
    }
}

/// Format a duration as "1h 23m 45s", "5m 12s" or "34s"
fn format_duration(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationOptions;
    use crate::oracle::demo::DemoResponder;
    use crate::oracle::payload::AnswerPayload;
    use crate::oracle::{OracleError, QuestionRequest, Severity};
    use crate::tui::surface::ScreenModel;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Answers after `delay`
    struct SlowService {
        delay: Duration,
    }

    #[async_trait]
    impl AnswerService for SlowService {
        async fn ask(&self, _request: &QuestionRequest) -> Result<AnswerPayload, OracleError> {
            tokio::time::sleep(self.delay).await;
            Ok(AnswerPayload::structured("Paris.", &["geo.pdf"]))
        }

        async fn health(&self) -> Result<(), OracleError> {
            Ok(())
        }
    }

    fn app(delay: Duration) -> App<SlowService> {
        let screen = Arc::new(Mutex::new(ScreenModel::new(Duration::from_secs(4))));
        let controller = Controller::with_demo(
            SlowService { delay },
            TuiSurface::new(screen.clone()),
            GenerationOptions::default(),
            Duration::from_millis(30),
            DemoResponder::pinned(0),
        );
        let mut app = App::new(controller, screen, LogBuffer::new(), &Config::default());
        app.answer_area = Rect::new(0, 0, 60, 10);
        app
    }

    fn press(app: &mut App<SlowService>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn press_with(app: &mut App<SlowService>, code: KeyCode, modifiers: KeyModifiers) {
        app.handle_key(KeyEvent::new(code, modifiers));
    }

    fn type_text(app: &mut App<SlowService>, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    fn toast_message(app: &App<SlowService>) -> Option<(String, Severity)> {
        let screen = lock_screen(&app.screen);
        screen
            .notifier
            .visible(Instant::now())
            .map(|(n, _)| (n.message.clone(), n.severity))
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_and_newline() {
        let mut app = app(Duration::ZERO);
        type_text(&mut app, "hello");
        press_with(&mut app, KeyCode::Enter, KeyModifiers::SHIFT);
        type_text(&mut app, "world");
        press(&mut app, KeyCode::Backspace);

        assert_eq!(app.input.text(), "hello\nworl");
        assert_eq!(app.input.char_count(), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn test_enter_submits_and_renders_answer() {
        let mut app = app(Duration::from_millis(50));
        type_text(&mut app, "What is the capital of France?");
        press(&mut app, KeyCode::Enter);

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(app.is_busy());
        assert!(app.controller.is_busy());

        // Input is inert while busy
        type_text(&mut app, "xyz");
        assert_eq!(app.input.text(), "What is the capital of France?");

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(!app.is_busy());
        match app.controller.region().view() {
            RegionView::Answer(snapshot) => {
                assert_eq!(snapshot.text, "Paris.");
                assert_eq!(snapshot.sources, vec!["geo.pdf"]);
            }
            other => panic!("expected answer, got {:?}", other),
        }
        assert_eq!(
            toast_message(&app).map(|(_, severity)| severity),
            Some(Severity::Success)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_follows_surface_busy() {
        let mut app = app(Duration::ZERO);
        app.controller.surface().set_busy(true);

        type_text(&mut app, "abc");
        press_with(&mut app, KeyCode::Enter, KeyModifiers::SHIFT);
        assert_eq!(app.input.text(), "");
        assert!(!app.input.can_submit(app.is_busy()));

        app.controller.surface().set_busy(false);
        type_text(&mut app, "abc");
        assert_eq!(app.input.text(), "abc");
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_question_shows_error() {
        let mut app = app(Duration::ZERO);
        type_text(&mut app, "too short");
        assert!(!app.input.can_submit(app.is_busy()));
        press_with(&mut app, KeyCode::Enter, KeyModifiers::CONTROL);

        tokio::time::sleep(Duration::from_millis(10)).await;
        let (message, severity) = toast_message(&app).unwrap();
        assert_eq!(severity, Severity::Error);
        assert!(message.contains("10 characters"));
        assert!(!app.is_busy());
    }

    #[tokio::test(start_paused = true)]
    async fn test_escape_clears_everything() {
        let mut app = app(Duration::from_secs(10));
        type_text(&mut app, "What is the capital of France?");
        press(&mut app, KeyCode::Enter);
        tokio::time::sleep(Duration::from_millis(10)).await;
        app.focus = Focus::Answer;

        press(&mut app, KeyCode::Esc);
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(app.input.text(), "");
        assert_eq!(app.input.char_count(), 0);
        assert_eq!(app.focus, Focus::Input);
        assert_eq!(app.controller.region().view(), RegionView::Waiting);
        assert!(!app.is_busy());
        assert_eq!(
            toast_message(&app),
            Some(("Question cancelled".to_string(), Severity::Info))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_focus_and_help() {
        let mut app = app(Duration::ZERO);
        type_text(&mut app, "draft");

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Answer);

        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        // Esc closes help without clearing the draft
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert_eq!(app.input.text(), "draft");

        // Typing in the answer panel returns focus to the input
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.focus, Focus::Input);
        assert_eq!(app.input.text(), "drafts");
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_without_answer() {
        let mut app = app(Duration::ZERO);
        press_with(&mut app, KeyCode::Char('y'), KeyModifiers::CONTROL);
        assert_eq!(
            toast_message(&app),
            Some(("No answer to copy yet".to_string(), Severity::Info))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_keys() {
        let mut app = app(Duration::ZERO);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.input.text(), "q");

        press_with(&mut app, KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(34)), "34s");
        assert_eq!(format_duration(Duration::from_secs(312)), "5m 12s");
        assert_eq!(format_duration(Duration::from_secs(5025)), "1h 23m 45s");
    }
}
