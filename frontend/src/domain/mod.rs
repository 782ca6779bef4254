//! Domain records, screen controllers and ports.
//!
//! Purpose: hold everything the client decides on its own (routes, drafts,
//! view state, stale-result handling) behind ports, so the HTTP adapter and
//! the terminal shell stay thin.
//!
//! Public surface:
//! - `Employee`, `Designation` and their create payloads.
//! - `Route`, the navigation surface.
//! - `HomeScreen`, `DetailScreen`, `AddScreen`, each publishing an immutable
//!   view through a `ViewCell`.

pub mod ports;

mod add_screen;
mod designation;
mod detail_screen;
mod draft;
mod employee;
mod home_screen;
mod listing;
mod route;
mod view_cell;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use self::add_screen::{AddScreen, AddView, SubmitError};
pub use self::designation::{Designation, DesignationId, NewDesignation};
pub use self::detail_screen::{DetailScreen, DetailView};
pub use self::draft::{DesignationDraft, DraftError, EmployeeDraft};
pub use self::employee::{Employee, EmployeeId, NewEmployee};
pub use self::home_screen::{HomeScreen, HomeView};
pub use self::route::{Route, RouteError};
pub use self::view_cell::{FetchOutcome, FetchTicket, OperationPhase, ViewCell};
