//! # flow-model
//!
//! Regression model runtime for flowcast.
//!
//! [`XgbModel`] evaluates tree ensembles saved in XGBoost's JSON format.
//! [`Model`] binds any [`Regressor`] to a typed [`FeatureVector`] so a
//! column-order mismatch is caught when the model is loaded rather than
//! showing up as silently wrong predictions.

mod error;
mod regressor;
mod schema;
mod xgboost;

pub use error::ModelError;
pub use regressor::Regressor;
pub use schema::{FeatureVector, Model};
pub use xgboost::{Link, XgbModel};
