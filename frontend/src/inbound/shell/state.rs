//! Shell-side implementations of the screen ports.
//!
//! Screens report notices and navigation requests while a command runs; the
//! shell drains both once the command returns.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::Route;
use crate::domain::ports::{Navigator, Notifier};

/// Notices waiting to be printed.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    pending: Mutex<Vec<String>>,
}

impl NoticeBoard {
    /// Take every notice posted since the last drain, oldest first.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *lock(&self.pending))
    }
}

impl Notifier for NoticeBoard {
    fn notify(&self, message: &str) {
        lock(&self.pending).push(message.to_owned());
    }
}

/// Latest navigation request not yet acted on.
#[derive(Debug, Default)]
pub struct PendingNavigation {
    route: Mutex<Option<Route>>,
}

impl PendingNavigation {
    /// Take the request, if any.
    pub fn take(&self) -> Option<Route> {
        lock(&self.route).take()
    }
}

impl Navigator for PendingNavigation {
    fn navigate(&self, route: Route) {
        *lock(&self.route) = Some(route);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
