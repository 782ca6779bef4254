//! Driven port for transient user notices.

/// Shows short-lived messages to the user.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Show `message` briefly.
    fn notify(&self, message: &str);
}
