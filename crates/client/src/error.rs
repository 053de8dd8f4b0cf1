//! Error types for the Sumo Logic client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Search Job API operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The host URL is missing or malformed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request could not be constructed (bad header, missing credentials).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Transport-level failure (connect, DNS, TLS, timeout).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The API answered with a status the operation does not accept.
    #[error("API error ({status_text}) at {url}: {message}{}", code_suffix(.code, .message))]
    ApiError {
        status: u16,
        /// Status line text, e.g. `404 Not Found`.
        status_text: String,
        url: String,
        /// Machine-readable error code from the response body, if any.
        code: Option<String>,
        message: String,
    },

    /// The response body could not be decoded.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// A job operation was attempted before a job id was available.
    #[error("No search job has been submitted for this session")]
    JobNotSubmitted,

    /// `submit` was called on a session that has no query.
    #[error("Session has no search query to submit")]
    MissingQuery,
}

/// ` [code: ...]` unless the code is absent or already the message.
fn code_suffix(code: &Option<String>, message: &str) -> String {
    match code {
        Some(code) if code != message => format!(" [code: {code}]"),
        _ => String::new(),
    }
}

impl ClientError {
    /// HTTP status of an [`ClientError::ApiError`], if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error indicates rejected credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// Check if this error is a usage error rather than a remote failure.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::JobNotSubmitted | Self::MissingQuery)
    }
}
