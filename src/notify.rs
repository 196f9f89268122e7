//! User-facing notifications (toasts).
//!
//! The controller never renders anything itself. It hands a [`Notification`]
//! to whatever [`Notifier`] it was built with: a UI toast layer, the CLI's
//! stderr printer, or a recording mock in tests.

#[cfg(test)]
#[path = "notify_test.rs"]
mod tests;

use tracing::warn;

pub const FAILURE_TITLE: &str = "Error";
pub const FAILURE_DESCRIPTION: &str = "Something went wrong";

/// A short message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into() }
    }

    /// The single generic message shown for any failed submission.
    #[must_use]
    pub fn submission_failed() -> Self {
        Self::new(FAILURE_TITLE, FAILURE_DESCRIPTION)
    }
}

/// Sink for user-facing notifications. Enables mocking in tests.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Notifier that only emits a `tracing` event. Used where no UI exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        warn!(title = %notification.title, description = %notification.description, "user notification");
    }
}
