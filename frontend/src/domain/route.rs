//! Navigation surface of the client.
//!
//! Paths are relative and carry no leading slash once normalised. The empty
//! path redirects to `home`.

use std::fmt;

use crate::domain::EmployeeId;

/// A location the shell can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Employee and designation listing.
    Home,
    /// Creation form for employees and designations.
    Add,
    /// One employee's detail page. The id is kept as the raw path segment so
    /// the detail screen decides how to treat malformed input.
    EmployeeDetail {
        /// Raw `:id` segment.
        id: String,
    },
}

/// Errors raised for paths outside the navigation surface.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// No route matches the path.
    #[error("no route matches `{path}`")]
    Unknown {
        /// Normalised path that failed to match.
        path: String,
    },
}

impl Route {
    /// Detail route for a known identifier.
    pub fn employee(id: EmployeeId) -> Self {
        Self::EmployeeDetail { id: id.to_string() }
    }

    /// Resolve a path to a route.
    ///
    /// # Examples
    /// ```
    /// use frontend::domain::Route;
    ///
    /// assert_eq!(Route::parse(""), Ok(Route::Home));
    /// assert_eq!(
    ///     Route::parse("/employees/5"),
    ///     Ok(Route::EmployeeDetail { id: "5".to_owned() })
    /// );
    /// ```
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let normalised = path.trim().trim_matches('/');
        let segments: Vec<&str> = normalised.split('/').collect();
        match segments.as_slice() {
            [""] | ["home"] => Ok(Self::Home),
            ["add"] => Ok(Self::Add),
            ["employees", id] if !id.is_empty() => Ok(Self::EmployeeDetail {
                id: (*id).to_owned(),
            }),
            _ => Err(RouteError::Unknown {
                path: normalised.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Add => write!(f, "add"),
            Self::EmployeeDetail { id } => write!(f, "employees/{id}"),
        }
    }
}
