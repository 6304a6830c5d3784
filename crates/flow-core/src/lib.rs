//! # flow-core
//!
//! Core types and error types for flowcast.
//!
//! This crate provides the foundational types shared across all flowcast crates:
//! - Forecast rows as delivered by the weather provider
//! - Calendar annotations (day-off flag and display label)
//! - Stage-1 / stage-2 prediction rows and the ordered prediction run
//! - Model registry references
//! - Cross-cutting error types

pub mod calendar;
pub mod errors;
pub mod forecast;
pub mod model_ref;
pub mod prediction;

pub use calendar::CalendarAnnotation;
pub use errors::CoreError;
pub use forecast::ForecastRow;
pub use model_ref::ModelRef;
pub use prediction::{AnnotatedRow, PredictionRun, Stage1Output, Stage2Output};
