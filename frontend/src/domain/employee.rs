//! Employee records as returned by the directory API.
//!
//! Records are plain payload holders. Nested employees (manager, colleagues,
//! subordinates) arrive without their own relations, so their lists are empty
//! and their manager is `None`.

use std::fmt;
use std::num::ParseIntError;

/// Numeric employee identifier assigned by the directory API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmployeeId(i64);

impl EmployeeId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Parse an identifier taken from a route segment.
    ///
    /// Surrounding whitespace is ignored; anything else that is not a base-10
    /// integer is rejected.
    ///
    /// # Examples
    /// ```
    /// use frontend::domain::EmployeeId;
    ///
    /// assert_eq!(EmployeeId::parse("42").map(EmployeeId::get), Ok(42));
    /// assert!(EmployeeId::parse("forty-two").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ParseIntError> {
        raw.trim().parse::<i64>().map(Self)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EmployeeId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// An employee as presented by the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Identifier assigned by the API.
    pub id: EmployeeId,
    /// Display name.
    pub name: String,
    /// Name of the employee's designation.
    pub job_title: String,
    /// Direct manager, absent for the top of the hierarchy.
    pub manager: Option<Box<Employee>>,
    /// Employees sharing the same manager.
    pub colleagues: Vec<Employee>,
    /// Employees reporting to this one.
    pub subordinates: Vec<Employee>,
}

impl Employee {
    /// Build an employee without relations.
    pub fn new(id: i64, name: impl Into<String>, job_title: impl Into<String>) -> Self {
        Self {
            id: EmployeeId(id),
            name: name.into(),
            job_title: job_title.into(),
            manager: None,
            colleagues: Vec::new(),
            subordinates: Vec::new(),
        }
    }

    /// Attach a manager.
    pub fn with_manager(mut self, manager: Employee) -> Self {
        self.manager = Some(Box::new(manager));
        self
    }

    /// Attach colleagues.
    pub fn with_colleagues(mut self, colleagues: Vec<Employee>) -> Self {
        self.colleagues = colleagues;
        self
    }

    /// Attach subordinates.
    pub fn with_subordinates(mut self, subordinates: Vec<Employee>) -> Self {
        self.subordinates = subordinates;
        self
    }

    /// Manager's display name, if any.
    pub fn manager_name(&self) -> Option<&str> {
        self.manager.as_deref().map(|manager| manager.name.as_str())
    }
}

/// Payload for creating an employee.
///
/// `manager` of `None` is sent as the API's `-1` sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    /// Display name.
    pub name: String,
    /// Designation name the employee is hired into.
    pub job_title: String,
    /// Manager to report to.
    pub manager: Option<EmployeeId>,
}
