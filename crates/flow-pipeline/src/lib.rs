//! # flow-pipeline
//!
//! The daily forecast run:
//!
//! `FetchWeather → AnnotateCalendar → Stage1 → Stage2 → Done`
//!
//! Stage 1 estimates visitors and vehicles from weather and the day-off
//! flag. Stage 2 feeds those estimates, unchanged, into the traffic model.
//! A [`PipelineContext`] owns the models, calendar and forecast source for
//! exactly one run.

mod error;
mod features;
mod models;
mod orchestrator;
mod stage;

pub use error::{LoadError, PipelineError};
pub use features::{DemandFeatures, TrafficFeatures};
pub use models::{LoadedModel, ModelSet, load_models};
pub use orchestrator::{PipelineContext, Stage};
pub use stage::{predict_stage1, predict_stage2};
