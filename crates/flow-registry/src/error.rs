//! Registry error types.

use thiserror::Error;

/// Errors that can occur when fetching models from a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The registry rejected the credentials (401/403) or none were configured.
    #[error("authentication failed ({status}): {message}")]
    Auth {
        /// HTTP status code, or 0 when the request was never sent.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Registry API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the registry.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse a registry response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The registry returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// No project matched, or the key has access to none.
    #[error("project not found: {0}")]
    ProjectNotFound(String),

    /// The named model version does not exist.
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// Writing or locating a model file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RegistryError {
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }
}
