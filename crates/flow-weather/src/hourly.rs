//! Hourly samples and their reduction to one row per day.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use flow_core::ForecastRow;
use serde::Deserialize;

use crate::error::WeatherError;

const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Hourly block of an Open-Meteo forecast response.
#[derive(Debug, Deserialize)]
pub(crate) struct HourlyBlock {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f64>>,
    pub precipitation: Vec<Option<f64>>,
    pub wind_speed_10m: Vec<Option<f64>>,
    pub wind_direction_10m: Vec<Option<f64>>,
}

/// One hour of forecast in local time. Any value may be missing.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlySample {
    pub time: NaiveDateTime,
    pub temperature_2m: Option<f64>,
    pub precipitation: Option<f64>,
    pub wind_speed_10m: Option<f64>,
    pub wind_direction_10m: Option<f64>,
}

impl HourlySample {
    /// The daily row this sample stands for, if every value is present.
    fn to_row(&self) -> Option<ForecastRow> {
        Some(ForecastRow {
            date: self.time.date(),
            temperature_2m_mean: self.temperature_2m?,
            precipitation_sum: self.precipitation?,
            wind_speed_10m_max: self.wind_speed_10m?,
            wind_direction_10m_dominant: self.wind_direction_10m?,
        })
    }
}

impl HourlyBlock {
    /// Zip the parallel columns into samples.
    pub fn into_samples(self) -> Result<Vec<HourlySample>, WeatherError> {
        let block = self;
        let len = block.time.len();
        for (name, column) in [
            ("temperature_2m", block.temperature_2m.len()),
            ("precipitation", block.precipitation.len()),
            ("wind_speed_10m", block.wind_speed_10m.len()),
            ("wind_direction_10m", block.wind_direction_10m.len()),
        ] {
            if column != len {
                return Err(WeatherError::Parse(format!(
                    "hourly column '{name}' has {column} values, expected {len}"
                )));
            }
        }

        block
            .time
            .iter()
            .enumerate()
            .map(|(i, raw)| {
                let time = NaiveDateTime::parse_from_str(raw, TIME_FORMAT)
                    .map_err(|e| WeatherError::Parse(format!("bad timestamp '{raw}': {e}")))?;
                Ok(HourlySample {
                    time,
                    temperature_2m: block.temperature_2m[i],
                    precipitation: block.precipitation[i],
                    wind_speed_10m: block.wind_speed_10m[i],
                    wind_direction_10m: block.wind_direction_10m[i],
                })
            })
            .collect()
    }
}

/// Reduce hourly samples to one row per local date.
///
/// For each date the complete sample closest to 12:00 is kept; on a tie the
/// earlier sample wins. Dates without any complete sample are dropped. At
/// most `days` dates are returned, in ascending order.
#[must_use]
pub fn daily_at_noon(samples: &[HourlySample], days: usize) -> Vec<ForecastRow> {
    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN);
    let mut best: BTreeMap<NaiveDate, (i64, ForecastRow)> = BTreeMap::new();

    for sample in samples {
        let Some(row) = sample.to_row() else {
            continue;
        };
        let distance = (sample.time - sample.time.date().and_time(noon))
            .num_minutes()
            .abs();
        match best.get(&row.date) {
            Some((current, _)) if *current <= distance => {}
            _ => {
                best.insert(row.date, (distance, row));
            }
        }
    }

    best.into_values().take(days).map(|(_, row)| row).collect()
}
