//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **http**: reqwest-backed directory API client
//!
//! Adapters are thin translators between domain types and wire
//! representations. They contain no screen logic.

pub mod http;
