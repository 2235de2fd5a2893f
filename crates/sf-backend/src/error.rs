//! Backend error types.

use thiserror::Error;

/// Errors that can occur when talking to the hosted database or auth service.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The database API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Message extracted from the error body.
        message: String,
    },

    /// The auth provider rejected the request (bad code, expired token,
    /// malformed email, throttled sends).
    #[error("auth rejected ({status}): {message}")]
    AuthRejected {
        /// HTTP status code returned by the auth provider.
        status: u16,
        /// Message extracted from the error body.
        message: String,
    },

    /// A targeted update matched no row.
    #[error("{table} row not found: {id}")]
    NotFound {
        /// Table that was queried.
        table: &'static str,
        /// Requested id.
        id: String,
    },

    /// Failed to parse a backend response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The database API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },
}

impl BackendError {
    /// The downstream message without local decoration, for forwarding to
    /// API callers verbatim.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Api { message, .. } | Self::AuthRejected { message, .. } => message.clone(),
            Self::Http(error) => error.to_string(),
            Self::Parse(message) => message.clone(),
            Self::NotFound { .. } | Self::RateLimited { .. } => self.to_string(),
        }
    }
}
