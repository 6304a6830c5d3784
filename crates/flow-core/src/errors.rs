//! Cross-cutting error types for flowcast.
//!
//! Domain-specific errors (e.g., `RegistryError`, `ModelError`) are defined in
//! their respective crates. `PipelineError` in `flow-pipeline` is where the
//! stage errors converge.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can be raised by any flowcast crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A prediction run contained the same date twice.
    #[error("Duplicate date in prediction run: {0}")]
    DuplicateDate(NaiveDate),

    /// Data failed validation (shape, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
