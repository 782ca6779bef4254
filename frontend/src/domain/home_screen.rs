//! Home screen: employee and designation listings with per-row deletes.
//!
//! Deletes are never optimistic. The listing only changes once the follow-up
//! fetch completes.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::listing::empty_when_not_found;
use crate::domain::ports::{DirectoryApi, DirectoryApiError, Notifier};
use crate::domain::{
    Designation, DesignationId, Employee, EmployeeId, FetchOutcome, OperationPhase, ViewCell,
};

const EMPLOYEE_REMOVED: &str = "Removed employee successfully";
const DESIGNATION_REMOVED: &str = "Removed designation successfully";

/// Immutable home listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeView {
    /// All employees.
    pub employees: Vec<Employee>,
    /// All designations, in the order the API returns them.
    pub designations: Vec<Designation>,
}

/// Controller for the home listing.
pub struct HomeScreen {
    api: Arc<dyn DirectoryApi>,
    notifier: Arc<dyn Notifier>,
    view: ViewCell<HomeView>,
}

impl HomeScreen {
    /// Create a screen with an empty listing.
    pub fn new(api: Arc<dyn DirectoryApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            view: ViewCell::default(),
        }
    }

    /// Current listing.
    pub fn view(&self) -> Arc<HomeView> {
        self.view.snapshot()
    }

    /// Phase of the last fetch or delete.
    pub fn phase(&self) -> OperationPhase {
        self.view.phase()
    }

    /// Load employees, then designations, and publish both as one view. A
    /// `404` from either list means that list is empty.
    ///
    /// # Errors
    ///
    /// Returns the first API failure; the previous listing stays in place.
    pub async fn fetch(&self) -> Result<FetchOutcome, DirectoryApiError> {
        let ticket = self.view.begin();
        let loaded = async {
            let employees = empty_when_not_found(self.api.list_employees().await, "employees")?;
            let designations =
                empty_when_not_found(self.api.list_designations().await, "designations")?;
            Ok::<_, DirectoryApiError>(HomeView {
                employees,
                designations,
            })
        }
        .await;

        match loaded {
            Ok(view) => {
                let outcome = self.view.publish(ticket, view);
                if outcome == FetchOutcome::Superseded {
                    debug!("discarding superseded home listing");
                }
                Ok(outcome)
            }
            Err(err) => {
                self.view.fail(ticket);
                error!(error = %err, "home listing fetch failed");
                Err(err)
            }
        }
    }

    /// Delete an employee, then refresh the listing.
    ///
    /// # Errors
    ///
    /// Returns the delete failure after showing its message. The listing is
    /// not refreshed in that case.
    pub async fn delete_employee(&self, id: EmployeeId) -> Result<(), DirectoryApiError> {
        self.view.set_phase(OperationPhase::Loading);
        let result = self.api.delete_employee(id).await;
        self.after_delete(result, EMPLOYEE_REMOVED).await
    }

    /// Delete a designation, then refresh the listing.
    ///
    /// # Errors
    ///
    /// Returns the delete failure after showing its message. The listing is
    /// not refreshed in that case.
    pub async fn delete_designation(&self, id: DesignationId) -> Result<(), DirectoryApiError> {
        self.view.set_phase(OperationPhase::Loading);
        let result = self.api.delete_designation(id).await;
        self.after_delete(result, DESIGNATION_REMOVED).await
    }

    async fn after_delete(
        &self,
        result: Result<String, DirectoryApiError>,
        success_notice: &str,
    ) -> Result<(), DirectoryApiError> {
        match result {
            Ok(confirmation) => {
                debug!(%confirmation, "delete confirmed");
                if let Err(err) = self.fetch().await {
                    warn!(error = %err, "listing refresh after delete failed");
                }
                self.notifier.notify(success_notice);
                Ok(())
            }
            Err(err) => {
                self.view.set_phase(OperationPhase::Failed);
                self.notifier.notify(&err.user_message());
                error!(error = ?err, "delete failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "home_screen_tests.rs"]
mod tests;
