//! Calendar error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalendarError {
    /// No holiday rules exist for the requested subdivision.
    #[error("unsupported holiday subdivision: {0}")]
    UnsupportedSubdivision(String),
}
