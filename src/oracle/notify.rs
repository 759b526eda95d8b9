//! Notification emitter
//!
//! Holds at most one notification. A new one replaces whatever is showing.
//! Each notification slides in, stays for the dwell time, slides out and is
//! dropped. Time is passed in explicitly so the lifecycle is testable.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Delay before the slide-in starts
pub const ENTER_DELAY: Duration = Duration::from_millis(100);
/// Slide-in and slide-out duration
pub const SLIDE_DURATION: Duration = Duration::from_millis(300);
/// Default time from creation until the slide-out starts
pub const DEFAULT_DWELL: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Error => "✖",
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl FromStr for Severity {
    type Err = std::convert::Infallible;

    /// Unknown names map to `Info`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Info,
        })
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    /// Write the notification to the log
    pub fn log(&self) {
        match self.severity {
            Severity::Error => tracing::error!("{}", self.message),
            Severity::Warning => tracing::warn!("{}", self.message),
            Severity::Success | Severity::Info => tracing::info!("{}", self.message),
        }
    }
}

/// Where a visible notification is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Waiting for the slide-in to start (not drawn yet)
    Pending,
    /// Sliding in; 0.0 = off-screen, 1.0 = fully in
    Entering(f32),
    Shown,
    /// Sliding out; 1.0 = fully in, 0.0 = gone
    Leaving(f32),
}

impl Phase {
    /// Fraction of the toast that is on screen
    pub fn visibility(&self) -> f32 {
        match self {
            Phase::Pending => 0.0,
            Phase::Entering(f) | Phase::Leaving(f) => *f,
            Phase::Shown => 1.0,
        }
    }
}

#[derive(Debug, Clone)]
struct Active {
    notification: Notification,
    created_at: Instant,
}

/// Single-slot notification holder
#[derive(Debug, Clone)]
pub struct Notifier {
    current: Option<Active>,
    dwell: Duration,
}

impl Notifier {
    pub fn new(dwell: Duration) -> Self {
        Self {
            current: None,
            dwell,
        }
    }

    /// Replace any current notification with a new one
    pub fn notify(&mut self, notification: Notification, now: Instant) {
        notification.log();
        self.current = Some(Active {
            notification,
            created_at: now,
        });
    }

    /// The notification still attached at `now`, with its phase
    pub fn visible(&self, now: Instant) -> Option<(&Notification, Phase)> {
        let active = self.current.as_ref()?;
        let phase = self.phase_of(active, now)?;
        Some((&active.notification, phase))
    }

    /// Drop the notification once it has fully slid out
    pub fn prune(&mut self, now: Instant) {
        if let Some(active) = &self.current {
            if self.phase_of(active, now).is_none() {
                self.current = None;
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    fn phase_of(&self, active: &Active, now: Instant) -> Option<Phase> {
        let age = now.saturating_duration_since(active.created_at);
        let slide = SLIDE_DURATION.as_secs_f32();

        if age >= self.dwell + SLIDE_DURATION {
            return None;
        }
        if age >= self.dwell {
            let out = (age - self.dwell).as_secs_f32() / slide;
            return Some(Phase::Leaving(1.0 - out));
        }
        if age < ENTER_DELAY {
            return Some(Phase::Pending);
        }
        let since_enter = age - ENTER_DELAY;
        if since_enter < SLIDE_DURATION {
            return Some(Phase::Entering(since_enter.as_secs_f32() / slide));
        }
        Some(Phase::Shown)
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_DWELL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_unknown_severity_falls_back_to_info() {
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("SUCCESS".parse::<Severity>().unwrap(), Severity::Success);
        let unknown: Severity = "critical".parse().unwrap();
        assert_eq!(unknown, Severity::Info);
        assert_eq!(unknown.icon(), Severity::Info.icon());
    }

    #[test]
    fn test_second_notification_replaces_first() {
        let t0 = Instant::now();
        let mut notifier = Notifier::default();
        notifier.notify(Notification::info("first"), t0);
        notifier.notify(Notification::error("second"), t0 + ms(1000));

        let (shown, _) = notifier.visible(t0 + ms(1500)).unwrap();
        assert_eq!(shown.message, "second");
        assert_eq!(shown.severity, Severity::Error);
    }

    #[test]
    fn test_replacement_restarts_the_dwell_clock() {
        let t0 = Instant::now();
        let mut notifier = Notifier::default();
        notifier.notify(Notification::info("first"), t0);
        notifier.notify(Notification::info("second"), t0 + ms(3000));

        // First would be gone by now, second is still up
        let (shown, phase) = notifier.visible(t0 + ms(4500)).unwrap();
        assert_eq!(shown.message, "second");
        assert_eq!(phase, Phase::Shown);
    }

    #[test]
    fn test_lifecycle_phases() {
        let t0 = Instant::now();
        let mut notifier = Notifier::default();
        notifier.notify(Notification::success("done"), t0);

        assert_eq!(notifier.visible(t0).unwrap().1, Phase::Pending);
        match notifier.visible(t0 + ms(250)).unwrap().1 {
            Phase::Entering(f) => assert!((f - 0.5).abs() < 0.01),
            other => panic!("expected entering, got {:?}", other),
        }
        assert_eq!(notifier.visible(t0 + ms(2000)).unwrap().1, Phase::Shown);
        match notifier.visible(t0 + ms(4150)).unwrap().1 {
            Phase::Leaving(f) => assert!((f - 0.5).abs() < 0.01),
            other => panic!("expected leaving, got {:?}", other),
        }
        assert!(notifier.visible(t0 + ms(4300)).is_none());
    }

    #[test]
    fn test_prune_detaches_expired() {
        let t0 = Instant::now();
        let mut notifier = Notifier::new(ms(500));
        notifier.notify(Notification::warning("short"), t0);

        notifier.prune(t0 + ms(700));
        assert!(!notifier.is_empty());

        notifier.prune(t0 + ms(800));
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_visibility_fraction() {
        assert_eq!(Phase::Pending.visibility(), 0.0);
        assert_eq!(Phase::Shown.visibility(), 1.0);
        assert_eq!(Phase::Leaving(0.25).visibility(), 0.25);
    }
}
