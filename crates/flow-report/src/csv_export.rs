//! Flat CSV export of a prediction run.

use std::io;
use std::path::Path;

use chrono::NaiveDate;
use flow_core::{PredictionRun, Stage2Output};
use serde::Serialize;

use crate::error::ReportError;

/// One CSV line. The `csv` crate cannot serialize flattened structs.
#[derive(Serialize)]
struct Record<'a> {
    date: NaiveDate,
    temperature_2m_mean: f64,
    precipitation_sum: f64,
    wind_speed_10m_max: f64,
    wind_direction_10m_dominant: f64,
    holidays: u8,
    holiday_name: &'a str,
    predicted_visitors: f64,
    predicted_vehicles: f64,
    predicted_traffic_count: f64,
}

impl<'a> From<&'a Stage2Output> for Record<'a> {
    fn from(row: &'a Stage2Output) -> Self {
        let weather = row.forecast();
        let calendar = row.calendar();
        Self {
            date: row.date(),
            temperature_2m_mean: weather.temperature_2m_mean,
            precipitation_sum: weather.precipitation_sum,
            wind_speed_10m_max: weather.wind_speed_10m_max,
            wind_direction_10m_dominant: weather.wind_direction_10m_dominant,
            holidays: calendar.holidays_flag(),
            holiday_name: &calendar.label,
            predicted_visitors: row.stage1.predicted_visitors,
            predicted_vehicles: row.stage1.predicted_vehicles,
            predicted_traffic_count: row.predicted_traffic_count,
        }
    }
}

/// Write the run as CSV with a header row.
///
/// # Errors
///
/// Returns [`ReportError::Csv`] if serialization or the writer fails.
pub fn write_csv<W: io::Write>(run: &PredictionRun, writer: W) -> Result<(), ReportError> {
    let mut out = csv::Writer::from_writer(writer);
    for row in run {
        out.serialize(Record::from(row))?;
    }
    out.flush()?;
    Ok(())
}

/// Write the run to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`ReportError`] if the file cannot be created or written.
pub fn write_csv_file(run: &PredictionRun, path: &Path) -> Result<(), ReportError> {
    let file = std::fs::File::create(path)?;
    write_csv(run, io::BufWriter::new(file))
}
