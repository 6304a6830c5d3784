use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of weather forecast, reduced from the provider's hourly series.
///
/// Field names match the feature names the regression models were trained on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    pub date: NaiveDate,
    /// Air temperature at 2 m, °C.
    pub temperature_2m_mean: f64,
    /// Precipitation, mm.
    pub precipitation_sum: f64,
    /// Wind speed at 10 m, km/h.
    pub wind_speed_10m_max: f64,
    /// Wind direction at 10 m, degrees.
    pub wind_direction_10m_dominant: f64,
}
