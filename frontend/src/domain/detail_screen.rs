//! Employee detail screen.
//!
//! The screen reacts to navigation-completed signals: each one that lands on
//! the detail route re-resolves the id from the route and fetches again, even
//! when the id is unchanged.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::ports::{DirectoryApi, DirectoryApiError};
use crate::domain::{Employee, EmployeeId, FetchOutcome, OperationPhase, Route, ViewCell};

/// What the detail screen currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailView {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// The requested employee.
    Loaded(Employee),
    /// The route's id segment is not an integer; no lookup was made.
    InvalidId {
        /// Segment as it appeared in the route.
        raw: String,
    },
    /// The lookup failed.
    Unavailable {
        /// Employee that was requested.
        id: EmployeeId,
        /// User-facing failure text.
        message: String,
    },
}

/// Controller for the employee detail page.
pub struct DetailScreen {
    api: Arc<dyn DirectoryApi>,
    view: ViewCell<DetailView>,
}

impl DetailScreen {
    /// Create an idle screen.
    pub fn new(api: Arc<dyn DirectoryApi>) -> Self {
        Self {
            api,
            view: ViewCell::default(),
        }
    }

    /// Current view.
    pub fn view(&self) -> Arc<DetailView> {
        self.view.snapshot()
    }

    /// Phase of the last lookup.
    pub fn phase(&self) -> OperationPhase {
        self.view.phase()
    }

    /// React to a completed navigation.
    ///
    /// Routes other than the detail route are ignored. A detail route always
    /// triggers a fresh lookup; only the newest lookup's result is shown.
    ///
    /// # Errors
    ///
    /// Returns the API failure after recording it in the view.
    pub async fn on_navigation_end(&self, route: &Route) -> Result<FetchOutcome, DirectoryApiError> {
        let Route::EmployeeDetail { id } = route else {
            return Ok(FetchOutcome::Ignored);
        };
        let ticket = self.view.begin();

        let Ok(employee_id) = EmployeeId::parse(id) else {
            warn!(raw_id = %id, "employee route id is not an integer");
            return Ok(self.view.publish(ticket, DetailView::InvalidId { raw: id.clone() }));
        };

        match self.api.get_employee(employee_id).await {
            Ok(employee) => {
                let outcome = self.view.publish(ticket, DetailView::Loaded(employee));
                if outcome == FetchOutcome::Superseded {
                    debug!(id = %employee_id, "discarding superseded employee lookup");
                }
                Ok(outcome)
            }
            Err(err) => {
                error!(id = %employee_id, error = %err, "employee lookup failed");
                let unavailable = DetailView::Unavailable {
                    id: employee_id,
                    message: err.user_message(),
                };
                self.view.publish_failed(ticket, unavailable);
                Err(err)
            }
        }
    }
}
