//! Open-Meteo forecast API client.
//!
//! Requests the hourly series in the location's local time zone so that
//! "noon" in the daily reduction means local noon.

use std::time::Duration;

use flow_config::WeatherConfig;
use flow_core::ForecastRow;
use serde::Deserialize;

use crate::error::WeatherError;
use crate::hourly::{HourlyBlock, HourlySample, daily_at_noon};

const HOURLY_VARIABLES: &str = "temperature_2m,precipitation,wind_speed_10m,wind_direction_10m";

#[derive(Deserialize)]
struct ForecastResponse {
    hourly: HourlyBlock,
}

#[derive(Deserialize)]
struct ErrorResponse {
    reason: String,
}

/// HTTP client for the Open-Meteo forecast endpoint.
pub struct OpenMeteoClient {
    http: reqwest::Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// # Errors
    ///
    /// Returns [`WeatherError::Http`] if the underlying client fails to build.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("flowcast/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub const fn config(&self) -> &WeatherConfig {
        &self.config
    }

    /// Request URL for the configured location.
    #[must_use]
    pub fn request_url(&self) -> String {
        format!(
            "{}?latitude={}&longitude={}&hourly={}&timezone={}&forecast_days={}",
            self.config.endpoint,
            self.config.latitude,
            self.config.longitude,
            HOURLY_VARIABLES,
            urlencoding::encode(&self.config.timezone),
            self.config.days,
        )
    }

    /// Fetch the raw hourly series.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError`] if the HTTP request fails, the provider
    /// returns a non-success status, or the response cannot be parsed.
    pub async fn hourly_forecast(&self) -> Result<Vec<HourlySample>, WeatherError> {
        tracing::info!(
            city = %self.config.city,
            latitude = self.config.latitude,
            longitude = self.config.longitude,
            days = self.config.days,
            "fetching weather forecast"
        );

        let resp = self.http.get(self.request_url()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.reason)
                .unwrap_or(body);
            return Err(WeatherError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = resp.text().await?;
        parse_forecast(&body)
    }

    /// Fetch and reduce to one row per day.
    ///
    /// # Errors
    ///
    /// Same as [`Self::hourly_forecast`].
    pub async fn daily_forecast(&self) -> Result<Vec<ForecastRow>, WeatherError> {
        let samples = self.hourly_forecast().await?;
        let days = usize::try_from(self.config.days).unwrap_or(usize::MAX);
        let rows = daily_at_noon(&samples, days);
        tracing::info!(hours = samples.len(), days = rows.len(), "weather forecast reduced");
        Ok(rows)
    }
}

/// Parse an Open-Meteo forecast body into hourly samples.
///
/// # Errors
///
/// Returns [`WeatherError::Parse`] for malformed JSON, ragged columns, or
/// bad timestamps.
pub fn parse_forecast(body: &str) -> Result<Vec<HourlySample>, WeatherError> {
    let data: ForecastResponse =
        serde_json::from_str(body).map_err(|e| WeatherError::Parse(e.to_string()))?;
    data.hourly.into_samples()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_encodes_timezone() {
        let client = OpenMeteoClient::new(WeatherConfig::default()).unwrap();
        let url = client.request_url();
        assert!(url.starts_with("https://api.open-meteo.com/v1/forecast?latitude=43.6532"));
        assert!(url.contains("longitude=-79.3832"));
        assert!(url.contains("timezone=America%2FToronto"));
        assert!(url.contains("forecast_days=7"));
        assert!(url.contains("hourly=temperature_2m,precipitation,wind_speed_10m,wind_direction_10m"));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            parse_forecast("not json"),
            Err(WeatherError::Parse(_))
        ));
    }
}
