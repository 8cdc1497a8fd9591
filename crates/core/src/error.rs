//! Unified error types for mcp-tw-typhoon.
//!
//! The display strings carry a stable code prefix so that a failure captured
//! into a [`StatusSnapshot`](crate::StatusSnapshot) still says what went wrong.

use rmcp::model::{ErrorCode, ErrorData as McpError};

/// Unified error types for the typhoon status server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid tool arguments (e.g., an overlong city name).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// The configured source URL could not be used.
    #[error("INVALID_URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete within the configured timeout.
    #[error("FETCH_TIMEOUT: {0}")]
    FetchTimeout(String),

    /// Transport failure or non-success HTTP status.
    #[error("HTTP_ERROR: {0}")]
    HttpError(String),
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let (code, message) = match &err {
            Error::InvalidInput(msg) => (-32602, msg.clone()),
            Error::InvalidUrl(msg) => (-32003, msg.clone()),
            Error::FetchTimeout(msg) => (-32006, msg.clone()),
            Error::HttpError(msg) => (-32008, msg.clone()),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::HttpError("status 503".to_string());
        assert_eq!(err.to_string(), "HTTP_ERROR: status 503");
    }

    #[test]
    fn test_timeout_display() {
        let err = Error::FetchTimeout("operation timed out".to_string());
        assert!(err.to_string().starts_with("FETCH_TIMEOUT"));
    }

    #[test]
    fn test_invalid_input_to_mcp_error() {
        let err = Error::InvalidInput("city too long".to_string());
        let mcp_err: McpError = err.into();
        assert_eq!(mcp_err.code.0, -32602);
        assert_eq!(mcp_err.message, "city too long");
    }

    #[test]
    fn test_http_error_to_mcp_error() {
        let mcp_err: McpError = Error::HttpError("status 500".into()).into();
        assert_eq!(mcp_err.code.0, -32008);
    }
}
