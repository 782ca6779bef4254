//! Inbound adapters that turn user input into screen operations while
//! keeping terminal details at the edge.
//!
//! The line-oriented shell lives under [`shell`].

pub mod shell;
