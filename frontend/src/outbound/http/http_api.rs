//! Reqwest-backed directory API adapter.
//!
//! This adapter owns transport details only: URL construction, JSON encoding
//! and decoding, and HTTP error mapping. It sets no client timeout and never
//! retries.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::dto::{DesignationDto, EmployeeDto, ErrorBodyDto, NewDesignationDto, NewEmployeeDto};
use crate::domain::ports::{DirectoryApi, DirectoryApiError};
use crate::domain::{
    Designation, DesignationId, Employee, EmployeeId, NewDesignation, NewEmployee,
};

const DEFAULT_USER_AGENT: &str = concat!("employee-directory-frontend/", env!("CARGO_PKG_VERSION"));
const EMPLOYEES: &str = "employees";
const DESIGNATIONS: &str = "designations";

/// Directory API adapter bound to one base URL, e.g.
/// `http://localhost:8080/api/v1`.
#[derive(Debug, Clone)]
pub struct HttpDirectoryApi {
    client: Client,
    base: Url,
}

impl HttpDirectoryApi {
    /// Build an adapter for `base`.
    /// ```rust,ignore
    /// let api = HttpDirectoryApi::new(Url::parse("http://localhost:8080/api/v1")?)?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(DEFAULT_USER_AGENT).build()?;
        Ok(Self::with_client(client, base))
    }

    /// Build an adapter around an existing client.
    pub fn with_client(client: Client, base: Url) -> Self {
        Self { client, base }
    }

    /// Base URL every path is resolved against.
    pub fn base(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, DirectoryApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| {
                DirectoryApiError::invalid_request(format!(
                    "base url `{}` cannot carry a path",
                    self.base
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Vec<u8>, DirectoryApiError> {
        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(status = status.as_u16(), bytes = body.len(), "directory response");
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        Ok(body.to_vec())
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, DirectoryApiError> {
        let body = self.send(request).await?;
        serde_json::from_slice(&body).map_err(|error| {
            DirectoryApiError::decode(format!("invalid directory JSON payload: {error}"))
        })
    }
}

#[async_trait]
impl DirectoryApi for HttpDirectoryApi {
    async fn list_employees(&self) -> Result<Vec<Employee>, DirectoryApiError> {
        let url = self.endpoint(&[EMPLOYEES])?;
        let employees: Vec<EmployeeDto> = self.send_json(self.client.get(url)).await?;
        Ok(employees.into_iter().map(Employee::from).collect())
    }

    async fn get_employee(&self, id: EmployeeId) -> Result<Employee, DirectoryApiError> {
        let url = self.endpoint(&[EMPLOYEES, &id.to_string()])?;
        let employee: EmployeeDto = self.send_json(self.client.get(url)).await?;
        Ok(employee.into())
    }

    async fn create_employee(
        &self,
        employee: &NewEmployee,
    ) -> Result<Employee, DirectoryApiError> {
        let url = self.endpoint(&[EMPLOYEES])?;
        let request = self.client.post(url).json(&NewEmployeeDto::from(employee));
        let created: EmployeeDto = self.send_json(request).await?;
        Ok(created.into())
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<String, DirectoryApiError> {
        let url = self.endpoint(&[EMPLOYEES, &id.to_string()])?;
        let body = self.send(self.client.delete(url)).await?;
        Ok(confirmation_text(&body))
    }

    async fn list_designations(&self) -> Result<Vec<Designation>, DirectoryApiError> {
        let url = self.endpoint(&[DESIGNATIONS])?;
        let designations: Vec<DesignationDto> = self.send_json(self.client.get(url)).await?;
        Ok(designations.into_iter().map(Designation::from).collect())
    }

    async fn create_designation(
        &self,
        designation: &NewDesignation,
    ) -> Result<Designation, DirectoryApiError> {
        let url = self.endpoint(&[DESIGNATIONS])?;
        let request = self
            .client
            .post(url)
            .json(&NewDesignationDto::from(designation));
        let created: DesignationDto = self.send_json(request).await?;
        Ok(created.into())
    }

    async fn delete_designation(&self, id: DesignationId) -> Result<String, DirectoryApiError> {
        let url = self.endpoint(&[DESIGNATIONS, &id.to_string()])?;
        let body = self.send(self.client.delete(url)).await?;
        Ok(confirmation_text(&body))
    }
}

/// Delete confirmations may be plain text, a JSON string, or a message
/// envelope.
fn confirmation_text(body: &[u8]) -> String {
    if let Ok(text) = serde_json::from_slice::<String>(body) {
        return text;
    }
    if let Ok(ErrorBodyDto {
        message: Some(message),
    }) = serde_json::from_slice::<ErrorBodyDto>(body)
    {
        return message;
    }
    String::from_utf8_lossy(body).trim().to_owned()
}

fn map_transport_error(error: reqwest::Error) -> DirectoryApiError {
    DirectoryApiError::transport(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> DirectoryApiError {
    let message = serde_json::from_slice::<ErrorBodyDto>(body)
        .ok()
        .and_then(|envelope| envelope.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| {
            let preview = body_preview(body);
            if preview.is_empty() {
                format!("status {}", status.as_u16())
            } else {
                preview
            }
        });
    DirectoryApiError::status(status.as_u16(), message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
