//! Core client library for the OrthoWatch terminal client.
//!
//! Holds everything that is not UI: configuration, logging bootstrap, the
//! HTTP transport with bearer injection and error normalization, the auth
//! API facade, and the session data model.

pub mod api;
pub mod config;
pub mod logging;
pub mod session;
