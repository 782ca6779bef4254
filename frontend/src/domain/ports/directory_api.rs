//! Driven port for the remote employee directory API.
//!
//! This is the only seam through which screens reach the network. Every call
//! is a single attempt: no retries, no timeout, and no validation of the
//! response beyond decoding it.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{
    Designation, DesignationId, Employee, EmployeeId, NewDesignation, NewEmployee,
};

define_port_error! {
    /// Errors surfaced while calling the directory API.
    pub enum DirectoryApiError {
        /// The request never produced a response.
        Transport { message: String } =>
            "directory transport failed: {message}",
        /// The API answered with a non-success status. `message` is the
        /// human-readable text from the error body.
        Status { status: u16, message: String } =>
            "directory returned status {status}: {message}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "directory response decode failed: {message}",
        /// The adapter could not build the request.
        InvalidRequest { message: String } =>
            "directory request invalid: {message}",
    }
}

impl DirectoryApiError {
    /// Text to show the user in a notice.
    ///
    /// Remote failures carry the server's message verbatim; local failures
    /// fall back to the error's display text.
    ///
    /// # Examples
    /// ```
    /// use frontend::domain::ports::DirectoryApiError;
    ///
    /// let err = DirectoryApiError::status(404_u16, "Employee not found");
    /// assert_eq!(err.user_message(), "Employee not found");
    /// ```
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Whether the API answered `404 Not Found`. List endpoints use it to
    /// report an empty collection.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

/// Port for the employee directory API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// `GET /employees`.
    async fn list_employees(&self) -> Result<Vec<Employee>, DirectoryApiError>;

    /// `GET /employees/{id}`.
    async fn get_employee(&self, id: EmployeeId) -> Result<Employee, DirectoryApiError>;

    /// `POST /employees`; returns the created record.
    async fn create_employee(&self, employee: &NewEmployee)
    -> Result<Employee, DirectoryApiError>;

    /// `DELETE /employees/{id}`; returns the API's confirmation text.
    async fn delete_employee(&self, id: EmployeeId) -> Result<String, DirectoryApiError>;

    /// `GET /designations`.
    async fn list_designations(&self) -> Result<Vec<Designation>, DirectoryApiError>;

    /// `POST /designations`; returns the created record.
    async fn create_designation(
        &self,
        designation: &NewDesignation,
    ) -> Result<Designation, DirectoryApiError>;

    /// `DELETE /designations/{id}`; returns the API's confirmation text.
    async fn delete_designation(&self, id: DesignationId) -> Result<String, DirectoryApiError>;
}

/// Fixture implementation backed by an empty directory.
///
/// Lists are empty, lookups fail with 404 and writes are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureDirectoryApi;

#[async_trait]
impl DirectoryApi for FixtureDirectoryApi {
    async fn list_employees(&self) -> Result<Vec<Employee>, DirectoryApiError> {
        Ok(Vec::new())
    }

    async fn get_employee(&self, id: EmployeeId) -> Result<Employee, DirectoryApiError> {
        Err(DirectoryApiError::status(
            404_u16,
            format!("Employee with id {id} not found"),
        ))
    }

    async fn create_employee(
        &self,
        _employee: &NewEmployee,
    ) -> Result<Employee, DirectoryApiError> {
        Err(DirectoryApiError::status(400_u16, "Fixture directory is read-only"))
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<String, DirectoryApiError> {
        Err(DirectoryApiError::status(
            404_u16,
            format!("Employee with id {id} not found"),
        ))
    }

    async fn list_designations(&self) -> Result<Vec<Designation>, DirectoryApiError> {
        Ok(Vec::new())
    }

    async fn create_designation(
        &self,
        _designation: &NewDesignation,
    ) -> Result<Designation, DirectoryApiError> {
        Err(DirectoryApiError::status(400_u16, "Fixture directory is read-only"))
    }

    async fn delete_designation(&self, id: DesignationId) -> Result<String, DirectoryApiError> {
        Err(DirectoryApiError::status(
            404_u16,
            format!("Designation with id {id} not found"),
        ))
    }
}
