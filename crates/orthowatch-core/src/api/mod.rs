//! HTTP transport and typed auth endpoints.

mod auth;
mod client;
mod error;

pub use auth::AuthApi;
pub use client::ApiClient;
pub use error::{ApiError, ApiErrorKind, ApiResult};

/// Standard User-Agent header for OrthoWatch API requests.
pub const USER_AGENT: &str = concat!("orthowatch/", env!("CARGO_PKG_VERSION"));
