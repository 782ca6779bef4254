//! Line commands understood by the shell.
//!
//! Form commands take pipe-separated fields so names may contain spaces:
//! `new-employee Grace Hopper | Dev | 1`.

use crate::domain::{DesignationDraft, DesignationId, EmployeeDraft, EmployeeId, Route, RouteError};

/// Usage text printed by `help`.
pub const USAGE: &str = "\
commands:
  home                                      show the listing
  add                                       open the creation form
  open <id>                                 show one employee
  go <path>                                 open a path, e.g. employees/3
  reload                                    re-enter the current page
  rm-employee <id>                          delete an employee (home)
  rm-designation <id>                       delete a designation (home)
  new-employee <name> | <designation> [| <manager-id>]
                                            create an employee (add)
  new-designation <name> [| <higher-id> [| equals]]
                                            create a designation (add)
  help                                      show this text
  quit                                      leave";

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move to a route.
    Navigate(Route),
    /// Re-enter the current route.
    Reload,
    /// Delete an employee from the listing.
    DeleteEmployee(EmployeeId),
    /// Delete a designation from the listing.
    DeleteDesignation(DesignationId),
    /// Submit the employee form.
    AddEmployee(EmployeeDraft),
    /// Submit the designation form.
    AddDesignation(DesignationDraft),
    /// Print usage.
    Help,
    /// Leave the shell.
    Quit,
}

/// Input the shell could not act on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The verb is not known.
    #[error("unknown command `{verb}`; type `help` for a list")]
    Unknown {
        /// First word of the line.
        verb: String,
    },
    /// A required argument is missing.
    #[error("`{verb}` needs {what}")]
    MissingArgument {
        /// Command verb.
        verb: &'static str,
        /// Description of the missing argument.
        what: &'static str,
    },
    /// An id argument is not an integer.
    #[error("`{value}` is not a numeric id")]
    InvalidId {
        /// Offending argument.
        value: String,
    },
    /// The peer-level flag is not recognised.
    #[error("`{value}` is not a valid equals flag; use `equals`, `yes` or `no`")]
    InvalidFlag {
        /// Offending argument.
        value: String,
    },
    /// The path is outside the navigation surface.
    #[error(transparent)]
    Route(#[from] RouteError),
    /// The action is not offered by the current page.
    #[error("`{verb}` is only available on the {page} page")]
    WrongPage {
        /// Command verb.
        verb: &'static str,
        /// Page offering the action.
        page: &'static str,
    },
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    ///
    /// # Examples
    /// ```
    /// use frontend::inbound::shell::Command;
    /// use frontend::domain::Route;
    ///
    /// assert_eq!(Command::parse("add"), Ok(Some(Command::Navigate(Route::Add))));
    /// assert_eq!(Command::parse("   "), Ok(None));
    /// ```
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb {
            "home" => Self::Navigate(Route::Home),
            "add" => Self::Navigate(Route::Add),
            "open" => Self::Navigate(Route::EmployeeDetail {
                id: required(rest, "open", "an employee id")?.to_owned(),
            }),
            "go" => Self::Navigate(Route::parse(rest)?),
            "reload" => Self::Reload,
            "rm-employee" => Self::DeleteEmployee(EmployeeId::new(parse_id(required(
                rest,
                "rm-employee",
                "an employee id",
            )?)?)),
            "rm-designation" => Self::DeleteDesignation(DesignationId::new(parse_id(required(
                rest,
                "rm-designation",
                "a designation id",
            )?)?)),
            "new-employee" => Self::AddEmployee(employee_draft(rest)?),
            "new-designation" => Self::AddDesignation(designation_draft(rest)?),
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => {
                return Err(CommandError::Unknown {
                    verb: other.to_owned(),
                });
            }
        };
        Ok(Some(command))
    }
}

fn required<'a>(
    rest: &'a str,
    verb: &'static str,
    what: &'static str,
) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument { verb, what })
    } else {
        Ok(rest)
    }
}

fn parse_id(raw: &str) -> Result<i64, CommandError> {
    raw.trim().parse().map_err(|_| CommandError::InvalidId {
        value: raw.trim().to_owned(),
    })
}

/// Blank or `-1` means "none", matching the form's default selection.
fn optional_id(raw: Option<&str>) -> Result<Option<i64>, CommandError> {
    match raw.map(str::trim) {
        None | Some("" | "-1") => Ok(None),
        Some(value) => parse_id(value).map(Some),
    }
}

fn fields(rest: &str) -> Vec<&str> {
    rest.split('|').map(str::trim).collect()
}

/// Empty name or designation is left for the screen to reject.
fn employee_draft(rest: &str) -> Result<EmployeeDraft, CommandError> {
    let fields = fields(rest);
    let mut fields = fields.into_iter();
    let name = fields.next().unwrap_or_default();
    let designation = fields.next().unwrap_or_default();
    let manager = optional_id(fields.next())?.map(EmployeeId::new);
    Ok(EmployeeDraft {
        name: name.to_owned(),
        designation: designation.to_owned(),
        manager,
    })
}

fn designation_draft(rest: &str) -> Result<DesignationDraft, CommandError> {
    let fields = fields(rest);
    let mut fields = fields.into_iter();
    let name = fields.next().unwrap_or_default();
    let higher = optional_id(fields.next())?.map(DesignationId::new);
    let equals = match fields.next() {
        None | Some("" | "no" | "false") => false,
        Some("equals" | "yes" | "true") => true,
        Some(other) => {
            return Err(CommandError::InvalidFlag {
                value: other.to_owned(),
            });
        }
    };
    Ok(DesignationDraft {
        name: name.to_owned(),
        higher,
        equals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("home", Command::Navigate(Route::Home))]
    #[case("open 3", Command::Navigate(Route::EmployeeDetail { id: "3".to_owned() }))]
    #[case("open abc", Command::Navigate(Route::EmployeeDetail { id: "abc".to_owned() }))]
    #[case("go /employees/5", Command::Navigate(Route::EmployeeDetail { id: "5".to_owned() }))]
    #[case("rm-employee 4", Command::DeleteEmployee(EmployeeId::new(4)))]
    #[case("rm-designation  2 ", Command::DeleteDesignation(DesignationId::new(2)))]
    #[case("exit", Command::Quit)]
    fn parses_simple_commands(#[case] line: &str, #[case] expected: Command) {
        assert_eq!(Command::parse(line), Ok(Some(expected)));
    }

    #[test]
    fn employee_fields_are_pipe_separated() {
        let parsed = Command::parse("new-employee Grace Hopper | Dev | 1").expect("parses");
        assert_eq!(
            parsed,
            Some(Command::AddEmployee(EmployeeDraft {
                name: "Grace Hopper".to_owned(),
                designation: "Dev".to_owned(),
                manager: Some(EmployeeId::new(1)),
            }))
        );
    }

    #[rstest]
    #[case("new-employee B | Dev")]
    #[case("new-employee B | Dev | -1")]
    #[case("new-employee B | Dev | ")]
    fn missing_manager_means_none(#[case] line: &str) {
        let Ok(Some(Command::AddEmployee(draft))) = Command::parse(line) else {
            panic!("expected an employee draft");
        };
        assert_eq!(draft.manager, None);
    }

    #[test]
    fn empty_employee_fields_are_left_for_validation() {
        let Ok(Some(Command::AddEmployee(draft))) = Command::parse("new-employee") else {
            panic!("expected an employee draft");
        };
        assert_eq!(draft, EmployeeDraft::default());
    }

    #[test]
    fn designation_flag_is_optional() {
        let parsed = Command::parse("new-designation Lead | 2 | equals").expect("parses");
        assert_eq!(
            parsed,
            Some(Command::AddDesignation(DesignationDraft {
                name: "Lead".to_owned(),
                higher: Some(DesignationId::new(2)),
                equals: true,
            }))
        );
        let Ok(Some(Command::AddDesignation(first))) = Command::parse("new-designation CEO") else {
            panic!("expected a designation draft");
        };
        assert_eq!(first.higher, None);
        assert!(!first.equals);
    }

    #[rstest]
    #[case("rm-employee", CommandError::MissingArgument { verb: "rm-employee", what: "an employee id" })]
    #[case("rm-employee x", CommandError::InvalidId { value: "x".to_owned() })]
    #[case("new-designation Lead | 2 | maybe", CommandError::InvalidFlag { value: "maybe".to_owned() })]
    #[case("fire 3", CommandError::Unknown { verb: "fire".to_owned() })]
    fn reports_malformed_input(#[case] line: &str, #[case] expected: CommandError) {
        assert_eq!(Command::parse(line), Err(expected));
    }

    #[test]
    fn unknown_paths_are_route_errors() {
        assert!(matches!(
            Command::parse("go settings"),
            Err(CommandError::Route(_))
        ));
    }
}
