// Key gate for the non-text keys
//
// Answer scrolling keys act on press and then keep acting while held, once
// an initial delay has passed. Toggle keys (focus, help, copy) act once per
// press; terminals that never report a release get a debounce instead.
// Text keys never go through here.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum gap between two toggles of a key that was never released
const TOGGLE_DEBOUNCE: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Repeat {
    /// Held this long before the first repeat
    delay: Duration,
    /// Then at most once per
    every: Duration,
}

/// Up/Down: one line per step
const LINE_REPEAT: Repeat = Repeat {
    delay: Duration::from_millis(400),
    every: Duration::from_millis(50),
};

/// PageUp/PageDown/Home/End: a page per step, so slower
const PAGE_REPEAT: Repeat = Repeat {
    delay: Duration::from_millis(300),
    every: Duration::from_millis(80),
};

fn repeat_for(code: KeyCode) -> Option<Repeat> {
    match code {
        KeyCode::Up | KeyCode::Down => Some(LINE_REPEAT),
        KeyCode::PageUp | KeyCode::PageDown | KeyCode::Home | KeyCode::End => Some(PAGE_REPEAT),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy)]
struct Held {
    since: Instant,
    last_fired: Instant,
}

/// Tracks held keys and decides whether a press should act
#[derive(Debug, Default)]
pub struct KeyGate {
    held: HashMap<KeyCode, Held>,
}

impl KeyGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if this press (or terminal auto-repeat) should act
    pub fn press(&mut self, code: KeyCode) -> bool {
        self.press_at(code, Instant::now())
    }

    pub fn release(&mut self, code: KeyCode) {
        self.held.remove(&code);
    }

    fn press_at(&mut self, code: KeyCode, now: Instant) -> bool {
        let Some(held) = self.held.get_mut(&code) else {
            self.held.insert(
                code,
                Held {
                    since: now,
                    last_fired: now,
                },
            );
            return true;
        };

        let since_fired = now.saturating_duration_since(held.last_fired);
        let fire = match repeat_for(code) {
            Some(repeat) => {
                now.saturating_duration_since(held.since) >= repeat.delay
                    && since_fired >= repeat.every
            }
            None => since_fired >= TOGGLE_DEBOUNCE,
        };
        if fire {
            held.last_fired = now;
        }
        fire
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_toggle_acts_once_per_press() {
        let mut gate = KeyGate::new();
        let t0 = Instant::now();

        assert!(gate.press_at(KeyCode::Tab, t0));
        assert!(!gate.press_at(KeyCode::Tab, t0 + ms(20)));
        assert!(!gate.press_at(KeyCode::Tab, t0 + ms(40)));

        gate.release(KeyCode::Tab);
        assert!(gate.press_at(KeyCode::Tab, t0 + ms(60)));
    }

    #[test]
    fn test_toggle_without_release_is_debounced() {
        let mut gate = KeyGate::new();
        let t0 = Instant::now();

        assert!(gate.press_at(KeyCode::F(1), t0));
        assert!(!gate.press_at(KeyCode::F(1), t0 + ms(100)));
        assert!(gate.press_at(KeyCode::F(1), t0 + ms(160)));
    }

    #[test]
    fn test_scroll_repeats_after_delay() {
        let mut gate = KeyGate::new();
        let t0 = Instant::now();

        assert!(gate.press_at(KeyCode::Down, t0));
        // Within the initial delay
        assert!(!gate.press_at(KeyCode::Down, t0 + ms(200)));
        assert!(gate.press_at(KeyCode::Down, t0 + ms(410)));
        // Repeat interval
        assert!(!gate.press_at(KeyCode::Down, t0 + ms(430)));
        assert!(gate.press_at(KeyCode::Down, t0 + ms(460)));
    }

    #[test]
    fn test_page_keys_repeat_slower() {
        let mut gate = KeyGate::new();
        let t0 = Instant::now();

        assert!(gate.press_at(KeyCode::PageDown, t0));
        assert!(gate.press_at(KeyCode::PageDown, t0 + ms(300)));
        assert!(!gate.press_at(KeyCode::PageDown, t0 + ms(350)));
        assert!(gate.press_at(KeyCode::PageDown, t0 + ms(380)));
    }

    #[test]
    fn test_keys_are_tracked_independently() {
        let mut gate = KeyGate::new();
        let t0 = Instant::now();

        assert!(gate.press_at(KeyCode::Tab, t0));
        assert!(gate.press_at(KeyCode::Char('?'), t0));
        assert!(gate.press_at(KeyCode::Up, t0));
    }
}
