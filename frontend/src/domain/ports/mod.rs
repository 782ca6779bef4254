//! Domain ports: the facade to the directory API and the shell-side seams
//! screens use to talk back to the user.

mod macros;
pub(crate) use macros::define_port_error;

mod directory_api;
mod navigator;
mod notifier;

#[cfg(test)]
pub use directory_api::MockDirectoryApi;
pub use directory_api::{DirectoryApi, DirectoryApiError, FixtureDirectoryApi};
#[cfg(test)]
pub use navigator::MockNavigator;
pub use navigator::Navigator;
#[cfg(test)]
pub use notifier::MockNotifier;
pub use notifier::Notifier;
