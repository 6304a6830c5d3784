//! Rows produced by each pipeline stage and the final ordered run.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarAnnotation;
use crate::errors::CoreError;
use crate::forecast::ForecastRow;

/// A forecast day with its calendar annotation attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedRow {
    #[serde(flatten)]
    pub forecast: ForecastRow,
    #[serde(flatten)]
    pub calendar: CalendarAnnotation,
}

impl AnnotatedRow {
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.forecast.date
    }
}

/// Output of stage 1: demand estimates for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage1Output {
    #[serde(flatten)]
    pub row: AnnotatedRow,
    pub predicted_visitors: f64,
    pub predicted_vehicles: f64,
}

/// Output of stage 2: traffic flow estimate for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage2Output {
    #[serde(flatten)]
    pub stage1: Stage1Output,
    pub predicted_traffic_count: f64,
}

impl Stage2Output {
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.stage1.row.forecast.date
    }

    #[must_use]
    pub const fn forecast(&self) -> &ForecastRow {
        &self.stage1.row.forecast
    }

    #[must_use]
    pub const fn calendar(&self) -> &CalendarAnnotation {
        &self.stage1.row.calendar
    }
}

/// Ordered stage-2 rows for one batch invocation, one per forecast day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictionRun {
    rows: Vec<Stage2Output>,
}

impl PredictionRun {
    /// Build a run, rejecting duplicate dates.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicateDate`] for the first date seen twice.
    pub fn new(rows: Vec<Stage2Output>) -> Result<Self, CoreError> {
        let mut seen = HashSet::with_capacity(rows.len());
        for row in &rows {
            if !seen.insert(row.date()) {
                return Err(CoreError::DuplicateDate(row.date()));
            }
        }
        Ok(Self { rows })
    }

    #[must_use]
    pub fn rows(&self) -> &[Stage2Output] {
        &self.rows
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<Stage2Output> {
        self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn mean_visitors(&self) -> Option<f64> {
        self.mean_of(|row| row.stage1.predicted_visitors)
    }

    #[must_use]
    pub fn mean_vehicles(&self) -> Option<f64> {
        self.mean_of(|row| row.stage1.predicted_vehicles)
    }

    #[must_use]
    pub fn mean_traffic(&self) -> Option<f64> {
        self.mean_of(|row| row.predicted_traffic_count)
    }

    /// Day with the highest traffic estimate. Ties resolve to the earliest row.
    #[must_use]
    pub fn peak_traffic(&self) -> Option<&Stage2Output> {
        self.rows.iter().reduce(|best, row| {
            if row.predicted_traffic_count > best.predicted_traffic_count {
                row
            } else {
                best
            }
        })
    }

    /// Day with the lowest traffic estimate. Ties resolve to the earliest row.
    #[must_use]
    pub fn lowest_traffic(&self) -> Option<&Stage2Output> {
        self.rows.iter().reduce(|best, row| {
            if row.predicted_traffic_count < best.predicted_traffic_count {
                row
            } else {
                best
            }
        })
    }

    #[allow(clippy::cast_precision_loss)]
    fn mean_of(&self, value: impl Fn(&Stage2Output) -> f64) -> Option<f64> {
        if self.rows.is_empty() {
            return None;
        }
        let total: f64 = self.rows.iter().map(value).sum();
        Some(total / self.rows.len() as f64)
    }
}

impl<'a> IntoIterator for &'a PredictionRun {
    type Item = &'a Stage2Output;
    type IntoIter = std::slice::Iter<'a, Stage2Output>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
