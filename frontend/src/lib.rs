//! Employee directory client.
//!
//! - [`domain`]: records, routes, screen controllers and their ports.
//! - [`outbound`]: the reqwest adapter for the directory REST API.
//! - [`inbound`]: the terminal shell driving the screens.
//! - [`settings`]: configuration loaded via OrthoConfig.

pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod settings;
