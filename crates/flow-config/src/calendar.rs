//! Holiday calendar region and the hand-maintained override table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A fixed date treated as a day off with a custom label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OverrideDate {
    pub date: NaiveDate,
    pub label: String,
}

impl OverrideDate {
    fn new(year: i32, month: u32, day: u32, label: &str) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(|date| Self {
            date,
            label: label.to_string(),
        })
    }
}

fn default_subdivision() -> String {
    String::from("ON")
}

/// Retail peak days that move traffic like a holiday.
fn default_overrides() -> Vec<OverrideDate> {
    [
        (2026, 11, 27, "Black Friday"),
        (2026, 12, 24, "Christmas Eve"),
        (2026, 12, 31, "New Year's Eve"),
        (2025, 11, 28, "Black Friday"),
        (2025, 12, 24, "Christmas Eve"),
        (2025, 12, 31, "New Year's Eve"),
    ]
    .into_iter()
    .filter_map(|(y, m, d, label)| OverrideDate::new(y, m, d, label))
    .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CalendarConfig {
    /// Province/territory code for the official holiday calendar.
    #[serde(default = "default_subdivision")]
    pub subdivision: String,

    /// Override table. Replaces the built-in table when set.
    #[serde(default = "default_overrides")]
    pub overrides: Vec<OverrideDate>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            subdivision: default_subdivision(),
            overrides: default_overrides(),
        }
    }
}
