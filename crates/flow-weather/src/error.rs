//! Weather provider error types.

use thiserror::Error;

/// Errors that can occur when fetching a forecast.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Provider `reason` or response body.
        message: String,
    },

    /// Failed to parse a provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Reading a forecast file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
