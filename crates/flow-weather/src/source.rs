//! The seam the pipeline fetches forecasts through.

use std::future::Future;
use std::path::Path;

use flow_core::ForecastRow;

use crate::client::OpenMeteoClient;
use crate::error::WeatherError;

/// Anything that can produce the daily forecast table for one run.
pub trait ForecastSource {
    fn fetch_forecast(&self) -> impl Future<Output = Result<Vec<ForecastRow>, WeatherError>> + Send;
}

impl ForecastSource for OpenMeteoClient {
    async fn fetch_forecast(&self) -> Result<Vec<ForecastRow>, WeatherError> {
        self.daily_forecast().await
    }
}

/// A fixed forecast, e.g. replayed from a JSON file.
#[derive(Debug, Clone, Default)]
pub struct StaticForecast {
    rows: Vec<ForecastRow>,
}

impl StaticForecast {
    #[must_use]
    pub const fn new(rows: Vec<ForecastRow>) -> Self {
        Self { rows }
    }

    /// Load a JSON array of forecast rows.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Io`] if the file cannot be read and
    /// [`WeatherError::Parse`] if it is not a valid row array.
    pub fn from_json_file(path: &Path) -> Result<Self, WeatherError> {
        let body = std::fs::read_to_string(path)?;
        let rows = serde_json::from_str(&body)
            .map_err(|e| WeatherError::Parse(format!("{}: {e}", path.display())))?;
        Ok(Self { rows })
    }

    #[must_use]
    pub fn rows(&self) -> &[ForecastRow] {
        &self.rows
    }

    /// Keep at most the first `len` days.
    pub fn truncate(&mut self, len: usize) {
        self.rows.truncate(len);
    }
}

impl ForecastSource for StaticForecast {
    async fn fetch_forecast(&self) -> Result<Vec<ForecastRow>, WeatherError> {
        Ok(self.rows.clone())
    }
}
