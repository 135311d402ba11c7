//! Normalized API errors.
//!
//! Every failure that leaves the transport carries a single display-ready
//! message, so screens never branch on status codes or raw bodies.

use std::fmt;

use serde_json::Value;

/// Fallback message when no usable detail can be extracted.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Categories of API errors for consistent handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// HTTP 401 - the session is no longer valid
    Unauthorized,
    /// Any other non-success HTTP status
    HttpStatus,
    /// Connection failure, timeout, DNS, etc.
    Transport,
    /// Response body did not match the expected shape
    Parse,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Unauthorized => write!(f, "unauthorized"),
            ApiErrorKind::HttpStatus => write!(f, "http_status"),
            ApiErrorKind::Transport => write!(f, "transport"),
            ApiErrorKind::Parse => write!(f, "parse"),
        }
    }
}

/// Structured API error with kind and display-ready message.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Error category
    pub kind: ApiErrorKind,
    /// One-line summary suitable for display
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Classifies a non-success HTTP response from its status and raw body.
    ///
    /// 401 becomes `Unauthorized`; everything else is `HttpStatus`. The
    /// message prefers the server's `message` field, then its `error` field,
    /// then falls back to the generic message.
    pub fn from_status(status: u16, body: &str) -> Self {
        let kind = if status == 401 {
            ApiErrorKind::Unauthorized
        } else {
            ApiErrorKind::HttpStatus
        };
        Self {
            kind,
            message: extract_server_message(body)
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
        }
    }

    /// Wraps a reqwest-level failure (never reached the server, or the
    /// connection broke mid-response).
    pub fn transport(err: &reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "Request timed out".to_string()
        } else if err.is_connect() {
            "Could not reach the server".to_string()
        } else {
            err.to_string()
        };
        Self::new(ApiErrorKind::Transport, message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Parse, message)
    }

    /// True when the server rejected the current credentials (HTTP 401).
    pub fn is_unauthorized(&self) -> bool {
        self.kind == ApiErrorKind::Unauthorized
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for API operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Pulls a human-readable message out of an error body.
///
/// The backend sends `{"message": "..."}`; some middlewares send
/// `{"error": "..."}` instead. Anything else yields `None`.
fn extract_server_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    for field in ["message", "error"] {
        if let Some(msg) = json.get(field).and_then(|v| v.as_str()) {
            let trimmed = msg.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_message_field() {
        let err = ApiError::from_status(400, r#"{"message": "Invalid credentials", "error": "Bad Request"}"#);
        assert_eq!(err.kind, ApiErrorKind::HttpStatus);
        assert_eq!(err.message, "Invalid credentials");
    }

    #[test]
    fn test_falls_back_to_error_field() {
        let err = ApiError::from_status(500, r#"{"error": "Internal Server Error"}"#);
        assert_eq!(err.message, "Internal Server Error");
    }

    #[test]
    fn test_generic_message_for_unusable_body() {
        assert_eq!(
            ApiError::from_status(502, "<html>bad gateway</html>").message,
            GENERIC_ERROR_MESSAGE
        );
        assert_eq!(ApiError::from_status(500, "").message, GENERIC_ERROR_MESSAGE);
        assert_eq!(
            ApiError::from_status(400, r#"{"message": "   "}"#).message,
            GENERIC_ERROR_MESSAGE
        );
    }

    #[test]
    fn test_401_is_unauthorized() {
        let err = ApiError::from_status(401, r#"{"message": "Token expired"}"#);
        assert_eq!(err.kind, ApiErrorKind::Unauthorized);
        assert!(err.is_unauthorized());
        assert_eq!(err.message, "Token expired");

        assert!(!ApiError::from_status(403, "").is_unauthorized());
    }
}
