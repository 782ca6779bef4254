//! Hand-written doubles shared by screen and shell tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{DirectoryApi, DirectoryApiError, Navigator, Notifier};
use crate::domain::{
    Designation, DesignationId, Employee, EmployeeId, NewDesignation, NewEmployee, Route,
};

#[derive(Default)]
struct DirectoryState {
    employees: Vec<Employee>,
    designations: Vec<Designation>,
    calls: Vec<String>,
    created_employees: Vec<NewEmployee>,
    created_designations: Vec<NewDesignation>,
    next_failure: Option<DirectoryApiError>,
}

/// In-memory directory that records every call as `VERB /path`. Empty
/// lists answer `404`, as the directory API does.
#[derive(Default)]
pub(crate) struct InMemoryDirectory {
    state: Mutex<DirectoryState>,
}

impl InMemoryDirectory {
    pub(crate) fn new(employees: Vec<Employee>, designations: Vec<Designation>) -> Self {
        Self {
            state: Mutex::new(DirectoryState {
                employees,
                designations,
                ..DirectoryState::default()
            }),
        }
    }

    /// Make the next call fail with `error`.
    pub(crate) fn fail_next(&self, error: DirectoryApiError) {
        self.lock().next_failure = Some(error);
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    pub(crate) fn created_employees(&self) -> Vec<NewEmployee> {
        self.lock().created_employees.clone()
    }

    pub(crate) fn created_designations(&self) -> Vec<NewDesignation> {
        self.lock().created_designations.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DirectoryState> {
        self.state.lock().expect("directory state poisoned")
    }

    fn record(&self, call: String) -> Result<std::sync::MutexGuard<'_, DirectoryState>, DirectoryApiError> {
        let mut state = self.lock();
        state.calls.push(call);
        match state.next_failure.take() {
            Some(error) => Err(error),
            None => Ok(state),
        }
    }
}

#[async_trait]
impl DirectoryApi for InMemoryDirectory {
    async fn list_employees(&self) -> Result<Vec<Employee>, DirectoryApiError> {
        let state = self.record("GET /employees".to_owned())?;
        if state.employees.is_empty() {
            return Err(DirectoryApiError::status(404_u16, "No employees found"));
        }
        Ok(state.employees.clone())
    }

    async fn get_employee(&self, id: EmployeeId) -> Result<Employee, DirectoryApiError> {
        let state = self.record(format!("GET /employees/{id}"))?;
        state
            .employees
            .iter()
            .find(|employee| employee.id == id)
            .cloned()
            .ok_or_else(|| DirectoryApiError::status(404_u16, "Employee not found"))
    }

    async fn create_employee(
        &self,
        employee: &NewEmployee,
    ) -> Result<Employee, DirectoryApiError> {
        let mut state = self.record("POST /employees".to_owned())?;
        let next_id = state
            .employees
            .iter()
            .map(|existing| existing.id.get())
            .max()
            .unwrap_or(0)
            + 1;
        let created = Employee::new(next_id, employee.name.clone(), employee.job_title.clone());
        state.created_employees.push(employee.clone());
        state.employees.push(created.clone());
        Ok(created)
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<String, DirectoryApiError> {
        let mut state = self.record(format!("DELETE /employees/{id}"))?;
        let before = state.employees.len();
        state.employees.retain(|employee| employee.id != id);
        if state.employees.len() == before {
            return Err(DirectoryApiError::status(404_u16, "Employee not found"));
        }
        Ok("Employee deleted".to_owned())
    }

    async fn list_designations(&self) -> Result<Vec<Designation>, DirectoryApiError> {
        let state = self.record("GET /designations".to_owned())?;
        if state.designations.is_empty() {
            return Err(DirectoryApiError::status(404_u16, "No designations found"));
        }
        Ok(state.designations.clone())
    }

    async fn create_designation(
        &self,
        designation: &NewDesignation,
    ) -> Result<Designation, DirectoryApiError> {
        let mut state = self.record("POST /designations".to_owned())?;
        let next_id = state
            .designations
            .iter()
            .map(|existing| existing.id.get())
            .max()
            .unwrap_or(0)
            + 1;
        let created = Designation::new(next_id, designation.name.clone());
        state.created_designations.push(designation.clone());
        state.designations.push(created.clone());
        Ok(created)
    }

    async fn delete_designation(&self, id: DesignationId) -> Result<String, DirectoryApiError> {
        let mut state = self.record(format!("DELETE /designations/{id}"))?;
        let before = state.designations.len();
        state.designations.retain(|designation| designation.id != id);
        if state.designations.len() == before {
            return Err(DirectoryApiError::status(404_u16, "Designation not found"));
        }
        Ok("Designation deleted".to_owned())
    }
}

/// Notifier that keeps every message.
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("notices poisoned").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages
            .lock()
            .expect("notices poisoned")
            .push(message.to_owned());
    }
}

/// Navigator that keeps every requested route.
#[derive(Default)]
pub(crate) struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub(crate) fn routes(&self) -> Vec<Route> {
        self.routes.lock().expect("routes poisoned").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().expect("routes poisoned").push(route);
    }
}
