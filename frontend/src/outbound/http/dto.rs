//! Wire DTOs for the directory API.
//!
//! Responses decode into these transport shapes first and are mapped into
//! domain records in one pass. Request payloads borrow from the domain
//! payloads and encode the API's `-1` "none" sentinel.

use serde::{Deserialize, Serialize};

use crate::domain::{Designation, DesignationId, Employee, EmployeeId, NewDesignation, NewEmployee};

const NONE_SENTINEL: i64 = -1;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct EmployeeDto {
    pub(super) id: i64,
    pub(super) name: String,
    #[serde(default)]
    pub(super) job_title: Option<String>,
    #[serde(default)]
    pub(super) manager: Option<Box<EmployeeDto>>,
    #[serde(default)]
    pub(super) colleagues: Option<Vec<EmployeeDto>>,
    #[serde(default)]
    pub(super) subordinates: Option<Vec<EmployeeDto>>,
}

impl From<EmployeeDto> for Employee {
    fn from(dto: EmployeeDto) -> Self {
        Self {
            id: EmployeeId::new(dto.id),
            name: dto.name,
            job_title: dto.job_title.unwrap_or_default(),
            manager: dto.manager.map(|manager| Box::new(Self::from(*manager))),
            colleagues: into_employees(dto.colleagues),
            subordinates: into_employees(dto.subordinates),
        }
    }
}

fn into_employees(list: Option<Vec<EmployeeDto>>) -> Vec<Employee> {
    list.unwrap_or_default()
        .into_iter()
        .map(Employee::from)
        .collect()
}

/// The reference API names the designation `title`; `name` is accepted too.
#[derive(Debug, Deserialize)]
pub(super) struct DesignationDto {
    pub(super) id: i64,
    #[serde(alias = "title")]
    pub(super) name: String,
    #[serde(default)]
    pub(super) level: Option<f32>,
}

impl From<DesignationDto> for Designation {
    fn from(dto: DesignationDto) -> Self {
        Self {
            id: DesignationId::new(dto.id),
            name: dto.name,
            level: dto.level,
        }
    }
}

/// Error envelope: `{ "message": ..., "status": ... }`.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorBodyDto {
    pub(super) message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct NewEmployeeDto<'a> {
    pub(super) name: &'a str,
    pub(super) job_title: &'a str,
    pub(super) manager_id: i64,
}

impl<'a> From<&'a NewEmployee> for NewEmployeeDto<'a> {
    fn from(employee: &'a NewEmployee) -> Self {
        Self {
            name: &employee.name,
            job_title: &employee.job_title,
            manager_id: employee.manager.map_or(NONE_SENTINEL, EmployeeId::get),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct NewDesignationDto<'a> {
    pub(super) name: &'a str,
    pub(super) higher: i64,
    pub(super) equals: bool,
}

impl<'a> From<&'a NewDesignation> for NewDesignationDto<'a> {
    fn from(designation: &'a NewDesignation) -> Self {
        Self {
            name: &designation.name,
            higher: designation.higher.map_or(NONE_SENTINEL, DesignationId::get),
            equals: designation.equals,
        }
    }
}
