//! Errors raised while running the forecast pipeline.

use flow_calendar::CalendarError;
use flow_core::{CoreError, ModelRef};
use flow_model::ModelError;
use flow_registry::RegistryError;
use flow_weather::WeatherError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The weather provider returned no usable days. Retrying later may help.
    #[error("forecast unavailable: {reason}")]
    ForecastUnavailable { reason: String },

    #[error("weather provider request failed")]
    WeatherProvider(#[from] WeatherError),

    #[error("model registry rejected the credentials")]
    RegistryAuthFailure(#[source] RegistryError),

    #[error("model registry unavailable")]
    RegistryUnavailable(#[source] RegistryError),

    #[error("failed to load model {model}")]
    ModelLoadFailure {
        model: ModelRef,
        #[source]
        source: LoadError,
    },

    #[error("model {model} failed to predict")]
    ModelPredictFailure {
        model: String,
        #[source]
        source: ModelError,
    },

    #[error("calendar rules unavailable")]
    Calendar(#[from] CalendarError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl PipelineError {
    /// Only an empty forecast is worth retrying.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ForecastUnavailable { .. })
    }

    /// Classify an error from connecting to the registry.
    #[must_use]
    pub fn from_registry(err: RegistryError) -> Self {
        if err.is_auth() {
            Self::RegistryAuthFailure(err)
        } else {
            Self::RegistryUnavailable(err)
        }
    }
}

/// Why a model artifact could not be turned into a bound model.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Model(#[from] ModelError),
}
