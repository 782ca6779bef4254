//! Add screen: creation forms for employees and designations.
//!
//! Reference lists feed the form's pickers and are loaded once on activation.
//! Submissions validate locally first; a rejected draft never reaches the API.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::listing::empty_when_not_found;
use crate::domain::ports::{DirectoryApi, DirectoryApiError, Navigator, Notifier};
use crate::domain::{
    Designation, DesignationDraft, DraftError, Employee, EmployeeDraft, FetchOutcome,
    OperationPhase, Route, ViewCell,
};

/// Reference data for the creation form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddView {
    /// Designations an employee can be hired into, and that a new
    /// designation can be placed under.
    pub designations: Vec<Designation>,
    /// Employees that can act as manager.
    pub employees: Vec<Employee>,
}

/// Why a submission did not complete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// A required field is empty; nothing was sent.
    #[error(transparent)]
    Invalid(#[from] DraftError),
    /// The API rejected or failed the create call.
    #[error(transparent)]
    Remote(#[from] DirectoryApiError),
}

/// Controller for the creation form.
pub struct AddScreen {
    api: Arc<dyn DirectoryApi>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    view: ViewCell<AddView>,
}

impl AddScreen {
    /// Create a screen with empty reference lists.
    pub fn new(
        api: Arc<dyn DirectoryApi>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            api,
            notifier,
            navigator,
            view: ViewCell::default(),
        }
    }

    /// Current reference lists.
    pub fn view(&self) -> Arc<AddView> {
        self.view.snapshot()
    }

    /// Phase of the last load or submission.
    pub fn phase(&self) -> OperationPhase {
        self.view.phase()
    }

    /// Load designations, then employees. A `404` from either list means
    /// that list is empty.
    ///
    /// # Errors
    ///
    /// Returns the first API failure; the previous lists stay in place.
    pub async fn activate(&self) -> Result<FetchOutcome, DirectoryApiError> {
        let ticket = self.view.begin();
        let loaded = async {
            let designations =
                empty_when_not_found(self.api.list_designations().await, "designations")?;
            let employees = empty_when_not_found(self.api.list_employees().await, "employees")?;
            Ok::<_, DirectoryApiError>(AddView {
                designations,
                employees,
            })
        }
        .await;

        match loaded {
            Ok(view) => Ok(self.view.publish(ticket, view)),
            Err(err) => {
                self.view.fail(ticket);
                error!(error = %err, "add form reference data failed to load");
                Err(err)
            }
        }
    }

    /// Submit an employee draft and, on success, open the new employee.
    ///
    /// # Errors
    ///
    /// [`SubmitError::Invalid`] when a required field is empty (no call is
    /// made); [`SubmitError::Remote`] when the create call fails. Both are
    /// shown to the user before returning.
    pub async fn add_employee(&self, draft: &EmployeeDraft) -> Result<Route, SubmitError> {
        let payload = self.check(draft.validate())?;
        self.view.set_phase(OperationPhase::Loading);
        let created = self.api.create_employee(&payload).await;
        let employee = self.settle(created)?;
        debug!(id = %employee.id, "employee created");
        Ok(self.go(Route::employee(employee.id)))
    }

    /// Submit a designation draft and, on success, return to the listing.
    ///
    /// # Errors
    ///
    /// As for [`AddScreen::add_employee`].
    pub async fn add_designation(&self, draft: &DesignationDraft) -> Result<Route, SubmitError> {
        let payload = self.check(draft.validate())?;
        self.view.set_phase(OperationPhase::Loading);
        let created = self.api.create_designation(&payload).await;
        let designation = self.settle(created)?;
        debug!(id = %designation.id, "designation created");
        Ok(self.go(Route::Home))
    }

    fn check<T>(&self, validated: Result<T, DraftError>) -> Result<T, SubmitError> {
        validated.map_err(|invalid| {
            self.notifier.notify(&invalid.to_string());
            SubmitError::Invalid(invalid)
        })
    }

    fn settle<T>(&self, created: Result<T, DirectoryApiError>) -> Result<T, SubmitError> {
        match created {
            Ok(record) => {
                self.view.set_phase(OperationPhase::Succeeded);
                Ok(record)
            }
            Err(err) => {
                self.view.set_phase(OperationPhase::Failed);
                self.notifier.notify(&err.user_message());
                error!(error = ?err, "create call failed");
                Err(SubmitError::Remote(err))
            }
        }
    }

    fn go(&self, route: Route) -> Route {
        self.navigator.navigate(route.clone());
        route
    }
}

#[cfg(test)]
#[path = "add_screen_tests.rs"]
mod tests;
