//! Error types for the workspace client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to the jobs API
#[derive(Debug, Error)]
pub enum ClientError {
    /// A required argument or configuration value was empty or malformed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The service answered with a non-success status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body as returned by the service
        message: String,
    },

    /// The request could not be completed (DNS, connect, timeout, protocol)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// A success response carried a body that could not be decoded
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Check if this error is a transport fault worth retrying
    ///
    /// Only connection and timeout failures qualify. Status errors are never
    /// transient from the client's point of view.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::RequestFailed(e) if e.is_connect() || e.is_timeout())
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_carries_status_and_body() {
        let error = ClientError::api_error(500, "upstream exploded");
        assert_eq!(
            error.to_string(),
            "API error (status 500): upstream exploded"
        );
        assert!(error.is_server_error());
        assert!(!error.is_client_error());
        assert!(!error.is_transient());
    }

    #[test]
    fn test_status_classification() {
        assert!(ClientError::api_error(403, "forbidden").is_client_error());
        assert!(!ClientError::invalid_argument("keyword cannot be empty").is_server_error());
    }
}
