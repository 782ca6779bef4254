//! In-progress form input on the add screen and its local validation.

use crate::domain::{DesignationId, EmployeeId, NewDesignation, NewEmployee};

/// Local validation failures. The display text is the notice shown to the
/// user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    /// The name field is empty.
    #[error("Name cannot be empty")]
    EmptyName,
    /// The designation field is empty.
    #[error("Designation cannot be empty")]
    EmptyDesignation,
}

/// Employee form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    /// Display name.
    pub name: String,
    /// Designation name, chosen from the reference list.
    pub designation: String,
    /// Manager, chosen from the reference list. `None` means no manager.
    pub manager: Option<EmployeeId>,
}

impl EmployeeDraft {
    /// Check required fields and build the create payload.
    ///
    /// # Examples
    /// ```
    /// use frontend::domain::{DraftError, EmployeeDraft};
    ///
    /// let draft = EmployeeDraft { name: "B".into(), ..EmployeeDraft::default() };
    /// assert_eq!(draft.validate(), Err(DraftError::EmptyDesignation));
    /// ```
    pub fn validate(&self) -> Result<NewEmployee, DraftError> {
        if self.name.is_empty() {
            return Err(DraftError::EmptyName);
        }
        if self.designation.is_empty() {
            return Err(DraftError::EmptyDesignation);
        }
        Ok(NewEmployee {
            name: self.name.clone(),
            job_title: self.designation.clone(),
            manager: self.manager,
        })
    }
}

/// Designation form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesignationDraft {
    /// Title of the new designation.
    pub name: String,
    /// Designation to attach under (or beside).
    pub higher: Option<DesignationId>,
    /// Peer-level flag.
    pub equals: bool,
}

impl DesignationDraft {
    /// Check required fields and build the create payload.
    pub fn validate(&self) -> Result<NewDesignation, DraftError> {
        if self.name.is_empty() {
            return Err(DraftError::EmptyName);
        }
        Ok(NewDesignation {
            name: self.name.clone(),
            higher: self.higher,
            equals: self.equals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_checked_before_designation() {
        let draft = EmployeeDraft::default();
        assert_eq!(draft.validate(), Err(DraftError::EmptyName));
        assert_eq!(DraftError::EmptyName.to_string(), "Name cannot be empty");
    }

    #[test]
    fn empty_designation_is_rejected() {
        let draft = EmployeeDraft {
            name: "B".to_owned(),
            ..EmployeeDraft::default()
        };
        let err = draft.validate().expect_err("designation is required");
        assert_eq!(err.to_string(), "Designation cannot be empty");
    }

    #[test]
    fn valid_employee_draft_maps_designation_to_job_title() {
        let draft = EmployeeDraft {
            name: "B".to_owned(),
            designation: "Dev".to_owned(),
            manager: Some(EmployeeId::new(1)),
        };
        assert_eq!(
            draft.validate(),
            Ok(NewEmployee {
                name: "B".to_owned(),
                job_title: "Dev".to_owned(),
                manager: Some(EmployeeId::new(1)),
            })
        );
    }

    #[test]
    fn designation_draft_only_requires_a_name() {
        assert_eq!(
            DesignationDraft::default().validate(),
            Err(DraftError::EmptyName)
        );
        let draft = DesignationDraft {
            name: "Lead".to_owned(),
            higher: Some(DesignationId::new(2)),
            equals: true,
        };
        let payload = draft.validate().expect("valid draft");
        assert_eq!(payload.higher, Some(DesignationId::new(2)));
        assert!(payload.equals);
    }
}
