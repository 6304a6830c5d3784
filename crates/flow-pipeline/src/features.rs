//! Model input rows for both stages.

use flow_core::{AnnotatedRow, Stage1Output};
use flow_model::FeatureVector;

/// Stage-1 inputs for the visitors and vehicles models.
#[derive(Debug, Clone, PartialEq)]
pub struct DemandFeatures {
    pub holidays: u8,
    pub temperature_2m_mean: f64,
    pub precipitation_sum: f64,
    pub wind_speed_10m_max: f64,
    pub wind_direction_10m_dominant: f64,
}

impl From<&AnnotatedRow> for DemandFeatures {
    fn from(row: &AnnotatedRow) -> Self {
        let weather = &row.forecast;
        Self {
            holidays: row.calendar.holidays_flag(),
            temperature_2m_mean: weather.temperature_2m_mean,
            precipitation_sum: weather.precipitation_sum,
            wind_speed_10m_max: weather.wind_speed_10m_max,
            wind_direction_10m_dominant: weather.wind_direction_10m_dominant,
        }
    }
}

impl FeatureVector for DemandFeatures {
    const NAMES: &'static [&'static str] = &[
        "holidays",
        "temperature_2m_mean",
        "precipitation_sum",
        "wind_speed_10m_max",
        "wind_direction_10m_dominant",
    ];

    #[allow(clippy::cast_possible_truncation)]
    fn to_row(&self) -> Vec<f32> {
        vec![
            f32::from(self.holidays),
            self.temperature_2m_mean as f32,
            self.precipitation_sum as f32,
            self.wind_speed_10m_max as f32,
            self.wind_direction_10m_dominant as f32,
        ]
    }
}

/// Stage-2 inputs: stage-1 estimates alongside the same weather columns.
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficFeatures {
    pub visitors: f64,
    pub holidays: u8,
    pub vehicles: f64,
    pub temperature_2m_mean: f64,
    pub precipitation_sum: f64,
    pub wind_speed_10m_max: f64,
    pub wind_direction_10m_dominant: f64,
}

impl From<&Stage1Output> for TrafficFeatures {
    /// `visitors` and `vehicles` are the stage-1 predictions, copied as is.
    fn from(row: &Stage1Output) -> Self {
        let demand = DemandFeatures::from(&row.row);
        Self {
            visitors: row.predicted_visitors,
            holidays: demand.holidays,
            vehicles: row.predicted_vehicles,
            temperature_2m_mean: demand.temperature_2m_mean,
            precipitation_sum: demand.precipitation_sum,
            wind_speed_10m_max: demand.wind_speed_10m_max,
            wind_direction_10m_dominant: demand.wind_direction_10m_dominant,
        }
    }
}

impl FeatureVector for TrafficFeatures {
    const NAMES: &'static [&'static str] = &[
        "visitors",
        "holidays",
        "vehicles",
        "temperature_2m_mean",
        "precipitation_sum",
        "wind_speed_10m_max",
        "wind_direction_10m_dominant",
    ];

    #[allow(clippy::cast_possible_truncation)]
    fn to_row(&self) -> Vec<f32> {
        vec![
            self.visitors as f32,
            f32::from(self.holidays),
            self.vehicles as f32,
            self.temperature_2m_mean as f32,
            self.precipitation_sum as f32,
            self.wind_speed_10m_max as f32,
            self.wind_direction_10m_dominant as f32,
        ]
    }
}
