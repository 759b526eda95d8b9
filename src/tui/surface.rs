//! Screen model shared between the controller and the draw loop
//!
//! The request task writes busy/overlay/notification changes through
//! [`TuiSurface`]; the event loop reads them every frame.

use crate::oracle::{Notification, Notifier, Surface};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Everything the controller can change on screen besides the answer region
#[derive(Debug)]
pub struct ScreenModel {
    /// Input and submit control are disabled while true
    pub busy: bool,
    /// Loading overlay message
    pub overlay: Option<String>,
    pub notifier: Notifier,
}

impl ScreenModel {
    pub fn new(dwell: Duration) -> Self {
        Self {
            busy: false,
            overlay: None,
            notifier: Notifier::new(dwell),
        }
    }
}

pub type SharedScreen = Arc<Mutex<ScreenModel>>;

pub fn lock_screen(screen: &SharedScreen) -> MutexGuard<'_, ScreenModel> {
    screen.lock().unwrap_or_else(|e| e.into_inner())
}

/// [`Surface`] backed by the shared screen model
#[derive(Debug, Clone)]
pub struct TuiSurface {
    screen: SharedScreen,
}

impl TuiSurface {
    pub fn new(screen: SharedScreen) -> Self {
        Self { screen }
    }
}

impl Surface for TuiSurface {
    fn set_busy(&self, busy: bool) {
        lock_screen(&self.screen).busy = busy;
    }

    fn set_overlay(&self, message: Option<&str>) {
        lock_screen(&self.screen).overlay = message.map(str::to_string);
    }

    fn notify(&self, notification: Notification) {
        lock_screen(&self.screen)
            .notifier
            .notify(notification, Instant::now());
    }
}
