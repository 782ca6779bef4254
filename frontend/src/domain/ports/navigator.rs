//! Driven port for requesting navigation from inside a screen.

use crate::domain::Route;

/// Moves the user to another route once a screen operation completes.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Request navigation to `route`.
    fn navigate(&self, route: Route);
}
