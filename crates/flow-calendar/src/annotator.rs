use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use flow_config::{CalendarConfig, OverrideDate};
use flow_core::{AnnotatedRow, CalendarAnnotation, ForecastRow};

use crate::error::CalendarError;
use crate::official::OfficialCalendar;

/// Resolves the day-off flag and label for a date.
///
/// Rules are checked in a fixed order and the first match wins:
/// weekend, then official holiday, then the override table. A date that is
/// both a Saturday and Canada Day is labelled `"Saturday"`; an override date
/// only surfaces its label on a weekday that is not an official holiday.
#[derive(Debug, Clone)]
pub struct CalendarAnnotator {
    official: OfficialCalendar,
    overrides: BTreeMap<NaiveDate, String>,
}

impl CalendarAnnotator {
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedSubdivision`] if no holiday rules
    /// exist for `subdivision`.
    pub fn new(subdivision: &str, overrides: &[OverrideDate]) -> Result<Self, CalendarError> {
        Ok(Self {
            official: OfficialCalendar::new(subdivision)?,
            overrides: overrides
                .iter()
                .map(|entry| (entry.date, entry.label.clone()))
                .collect(),
        })
    }

    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn from_config(config: &CalendarConfig) -> Result<Self, CalendarError> {
        Self::new(&config.subdivision, &config.overrides)
    }

    #[must_use]
    pub const fn official(&self) -> &OfficialCalendar {
        &self.official
    }

    #[must_use]
    pub fn annotate(&self, date: NaiveDate) -> CalendarAnnotation {
        match date.weekday() {
            Weekday::Sat => return CalendarAnnotation::day_off("Saturday"),
            Weekday::Sun => return CalendarAnnotation::day_off("Sunday"),
            _ => {}
        }
        if let Some(name) = self.official.get(date) {
            return CalendarAnnotation::day_off(name);
        }
        if let Some(name) = self.overrides.get(&date) {
            return CalendarAnnotation::day_off(name.clone());
        }
        CalendarAnnotation::working_day()
    }

    /// Annotations for `days` consecutive dates starting at `start`.
    #[must_use]
    pub fn annotate_range(&self, start: NaiveDate, days: u32) -> Vec<(NaiveDate, CalendarAnnotation)> {
        (0..u64::from(days))
            .map_while(|offset| start.checked_add_days(Days::new(offset)))
            .map(|date| (date, self.annotate(date)))
            .collect()
    }

    /// Attach annotations to forecast rows, preserving order.
    #[must_use]
    pub fn annotate_rows(&self, rows: Vec<ForecastRow>) -> Vec<AnnotatedRow> {
        let annotated: Vec<AnnotatedRow> = rows
            .into_iter()
            .map(|forecast| {
                let calendar = self.annotate(forecast.date);
                AnnotatedRow { forecast, calendar }
            })
            .collect();

        let days_off = annotated.iter().filter(|r| r.calendar.is_day_off).count();
        let weekends = annotated
            .iter()
            .filter(|r| matches!(r.calendar.label.as_str(), "Saturday" | "Sunday"))
            .count();
        tracing::info!(
            days_off,
            weekends,
            other = days_off - weekends,
            "calendar annotated"
        );
        for row in annotated.iter().filter(|r| r.calendar.is_day_off) {
            tracing::debug!(date = %row.date(), label = %row.calendar.label, "day off");
        }

        annotated
    }
}
