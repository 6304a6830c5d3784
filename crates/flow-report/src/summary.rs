//! Headline statistics for a run.

use chrono::NaiveDate;
use flow_core::{PredictionRun, Stage2Output};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayHighlight {
    pub date: NaiveDate,
    pub traffic: f64,
    pub label: String,
}

impl From<&Stage2Output> for DayHighlight {
    fn from(row: &Stage2Output) -> Self {
        Self {
            date: row.date(),
            traffic: row.predicted_traffic_count,
            label: row.calendar().label.clone(),
        }
    }
}

/// Averages plus the busiest and quietest days.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub days: usize,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub mean_visitors: f64,
    pub mean_vehicles: f64,
    pub mean_traffic: f64,
    pub peak: DayHighlight,
    pub lowest: DayHighlight,
}

impl Summary {
    /// `None` for an empty run.
    #[must_use]
    pub fn from_run(run: &PredictionRun) -> Option<Self> {
        let rows = run.rows();
        Some(Self {
            days: run.len(),
            first_date: rows.first()?.date(),
            last_date: rows.last()?.date(),
            mean_visitors: run.mean_visitors()?,
            mean_vehicles: run.mean_vehicles()?,
            mean_traffic: run.mean_traffic()?,
            peak: run.peak_traffic()?.into(),
            lowest: run.lowest_traffic()?.into(),
        })
    }
}
