// Theme system for the TUI
//
// Each theme defines colors for every UI element. Selected by name from the
// [ui] section of the config file.

use crate::logging::LogLevel;
use crate::oracle::Severity;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Neon,
    Dark,
    Light,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[ThemeKind::Neon, ThemeKind::Dark, ThemeKind::Light]
    }

    /// Look up by config name; unknown names fall back to the default
    pub fn from_name(name: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_default()
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Neon => "neon",
            ThemeKind::Dark => "dark",
            ThemeKind::Light => "light",
        }
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Neon => Theme::neon(),
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    /// Focus glow
    pub border_focused: Color,
    pub border_type: BorderType,

    // Title and status
    pub title: Color,
    pub status_bar: Color,

    // Answer panel
    pub answer: Color,
    pub source: Color,
    pub cursor: Color,

    // Character counter
    pub counter: Color,
    pub counter_warn: Color,
    pub counter_danger: Color,

    // Notification severities
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::neon()
    }
}

impl Theme {
    /// Neon theme (default): magenta/cyan glow on a dark background
    pub fn neon() -> Self {
        Self {
            bg: Color::Rgb(12, 10, 24),
            fg: Color::Rgb(230, 230, 250),
            muted: Color::Rgb(120, 110, 160),
            border: Color::Rgb(90, 60, 140),
            border_focused: Color::Rgb(0, 255, 255),
            border_type: BorderType::Rounded,

            title: Color::Rgb(255, 0, 200),
            status_bar: Color::Rgb(150, 120, 255),

            answer: Color::Rgb(230, 230, 250),
            source: Color::Rgb(0, 220, 200),
            cursor: Color::Rgb(255, 0, 200),

            counter: Color::Rgb(120, 110, 160),
            counter_warn: Color::Rgb(255, 200, 0),
            counter_danger: Color::Rgb(255, 60, 90),

            success: Color::Rgb(57, 255, 20),
            error: Color::Rgb(255, 60, 90),
            warning: Color::Rgb(255, 200, 0),
            info: Color::Rgb(0, 200, 255),

            log_error: Color::Rgb(255, 60, 90),
            log_warn: Color::Rgb(255, 200, 0),
            log_info: Color::Rgb(0, 200, 255),
            log_debug: Color::Rgb(120, 110, 160),
        }
    }

    /// Dark theme using the terminal palette
    pub fn dark() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            border_focused: Color::Cyan,
            border_type: BorderType::Plain,

            title: Color::Cyan,
            status_bar: Color::Green,

            answer: Color::White,
            source: Color::LightBlue,
            cursor: Color::Cyan,

            counter: Color::Gray,
            counter_warn: Color::Yellow,
            counter_danger: Color::Red,

            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Blue,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            muted: Color::Gray,
            border: Color::DarkGray,
            border_focused: Color::Blue,
            border_type: BorderType::Plain,

            title: Color::Blue,
            status_bar: Color::DarkGray,

            answer: Color::Black,
            source: Color::Blue,
            cursor: Color::Magenta,

            counter: Color::DarkGray,
            counter_warn: Color::Rgb(184, 134, 11), // Dark goldenrod
            counter_danger: Color::Red,

            success: Color::Green,
            error: Color::Red,
            warning: Color::Rgb(184, 134, 11),
            info: Color::Blue,

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11),
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
        }
    }

    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Border style, glowing when focused
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Success => self.success,
            Severity::Error => self.error,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
        }
    }

    pub fn log_color(&self, level: LogLevel) -> Color {
        match level {
            LogLevel::Error => self.log_error,
            LogLevel::Warn => self.log_warn,
            LogLevel::Info => self.log_info,
            LogLevel::Debug | LogLevel::Trace => self.log_debug,
        }
    }
}
