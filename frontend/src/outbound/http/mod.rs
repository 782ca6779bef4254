//! HTTP outbound adapter for the directory API.
//!
//! This module provides a thin reqwest implementation of the `DirectoryApi`
//! port.

mod dto;
mod http_api;

pub use http_api::HttpDirectoryApi;
