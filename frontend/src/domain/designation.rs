//! Designations (job titles) and their hierarchy relation fields.
//!
//! The directory API computes each designation's level; this client treats the
//! hierarchy as opaque reference data.

use std::fmt;

/// Numeric designation identifier assigned by the directory API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DesignationId(i64);

impl DesignationId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for DesignationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for DesignationId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A designation as listed by the directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Designation {
    /// Identifier assigned by the API.
    pub id: DesignationId,
    /// Title, e.g. `Director`.
    pub name: String,
    /// Level computed by the API; lower is more senior.
    pub level: Option<f32>,
}

impl Designation {
    /// Build a designation without a level.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: DesignationId(id),
            name: name.into(),
            level: None,
        }
    }

    /// Attach the API-computed level.
    pub fn with_level(mut self, level: f32) -> Self {
        self.level = Some(level);
        self
    }
}

/// Payload for creating a designation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDesignation {
    /// Title of the new designation.
    pub name: String,
    /// Designation this one sits under (or beside, with `equals`). `None` is
    /// sent as the API's `-1` sentinel and is only accepted for the first
    /// designation.
    pub higher: Option<DesignationId>,
    /// Place the new designation on the same level as `higher` instead of
    /// below it.
    pub equals: bool,
}
