//! What the controller needs from whatever is drawing the screen

use super::notify::Notification;

/// Rendering surface driven by the controller
///
/// Implementations must be cheap and non-blocking: they are called from the
/// request task while it holds no locks of its own.
pub trait Surface: Send + Sync + 'static {
    /// Disable (true) or restore (false) the question input and submit control
    ///
    /// Front ends gate input on this, not on the controller's own state.
    fn set_busy(&self, busy: bool);

    /// Show a loading overlay with `message`, or hide it with `None`
    fn set_overlay(&self, message: Option<&str>);

    /// Show a notification, replacing any visible one
    fn notify(&self, notification: Notification);
}
