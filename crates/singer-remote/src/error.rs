//! Error types for the remote service boundary.

use thiserror::Error;

/// Result type for remote operations.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Errors that can occur talking to the generative service.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// No API key in the environment.
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    /// Composition prompt was empty after trimming.
    #[error("prompt must not be empty")]
    EmptyPrompt,

    /// Transport-level failure (connection, TLS, timeout).
    #[error("HTTP error: {message}")]
    Http {
        /// Error message.
        message: String,
    },

    /// The service answered with a non-success status.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body or status text.
        message: String,
    },

    /// The service answered but carried no usable payload.
    #[error("empty response: no {what} returned")]
    EmptyResponse {
        /// What was expected (text, audio data).
        what: String,
    },

    /// The response payload violates the provider contract.
    #[error("contract violation: {message}")]
    Contract {
        /// Error message.
        message: String,
    },
}

impl RemoteError {
    /// Creates an HTTP transport error.
    pub fn http(message: impl Into<String>) -> Self {
        Self::Http {
            message: message.into(),
        }
    }

    /// Creates an API status error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Creates an empty-response error.
    pub fn empty_response(what: impl Into<String>) -> Self {
        Self::EmptyResponse { what: what.into() }
    }

    /// Creates a contract violation error.
    pub fn contract(message: impl Into<String>) -> Self {
        Self::Contract {
            message: message.into(),
        }
    }

    /// Get the error code for reporting.
    ///
    /// Codes are stable and can be used for programmatic error handling.
    pub fn code(&self) -> &'static str {
        match self {
            RemoteError::MissingApiKey => "REMOTE_001",
            RemoteError::EmptyPrompt => "REMOTE_002",
            RemoteError::Http { .. } => "REMOTE_003",
            RemoteError::Api { .. } => "REMOTE_004",
            RemoteError::EmptyResponse { .. } => "REMOTE_005",
            RemoteError::Contract { .. } => "REMOTE_006",
        }
    }

    /// Get the error category for grouping related errors.
    pub fn category(&self) -> &'static str {
        "remote"
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http {
            message: err.to_string(),
        }
    }
}
