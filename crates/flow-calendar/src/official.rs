//! Official statutory holidays of a Canadian subdivision.
//!
//! Only Ontario (`ON`) is implemented. Holidays are derived from rules, so
//! any year resolves without a lookup table.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::CalendarError;
use crate::rules::{easter_sunday, is_weekend, nth_weekday, weekday_before};

/// Holidays that move to the next working day when they land on a weekend.
const OBSERVED: [&str; 4] = ["New Year's Day", "Canada Day", "Christmas Day", "Boxing Day"];

#[derive(Debug, Clone)]
pub struct OfficialCalendar {
    subdivision: String,
}

impl OfficialCalendar {
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedSubdivision`] for anything but `ON`.
    pub fn new(subdivision: &str) -> Result<Self, CalendarError> {
        if subdivision.eq_ignore_ascii_case("ON") {
            Ok(Self {
                subdivision: "ON".to_string(),
            })
        } else {
            Err(CalendarError::UnsupportedSubdivision(subdivision.to_string()))
        }
    }

    #[must_use]
    pub fn subdivision(&self) -> &str {
        &self.subdivision
    }

    /// Official name of the holiday on `date`, if any.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<String> {
        self.holidays(date.year()).remove(&date)
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.get(date).is_some()
    }

    /// All holidays of `year`, observed days included.
    #[must_use]
    pub fn holidays(&self, year: i32) -> BTreeMap<NaiveDate, String> {
        let mut days = BTreeMap::new();
        let mut add = |date: Option<NaiveDate>, name: &str| {
            if let Some(date) = date {
                days.insert(date, name.to_string());
            }
        };

        add(NaiveDate::from_ymd_opt(year, 1, 1), "New Year's Day");
        if year >= 2008 {
            add(nth_weekday(year, 2, Weekday::Mon, 3), "Family Day");
        }
        add(
            easter_sunday(year).and_then(|easter| easter.checked_sub_days(Days::new(2))),
            "Good Friday",
        );
        add(weekday_before(year, 5, 25, Weekday::Mon), "Victoria Day");
        add(NaiveDate::from_ymd_opt(year, 7, 1), "Canada Day");
        add(nth_weekday(year, 8, Weekday::Mon, 1), "Civic Holiday");
        add(nth_weekday(year, 9, Weekday::Mon, 1), "Labour Day");
        add(nth_weekday(year, 10, Weekday::Mon, 2), "Thanksgiving Day");
        add(NaiveDate::from_ymd_opt(year, 12, 25), "Christmas Day");
        add(NaiveDate::from_ymd_opt(year, 12, 26), "Boxing Day");

        let weekend_holidays: Vec<(NaiveDate, String)> = days
            .iter()
            .filter(|(date, name)| is_weekend(**date) && OBSERVED.contains(&name.as_str()))
            .map(|(date, name)| (*date, name.clone()))
            .collect();

        for (date, name) in weekend_holidays {
            if let Some(observed) = next_working_day(date, &days) {
                days.insert(observed, format!("{name} (observed)"));
            }
        }

        days
    }
}

fn next_working_day(from: NaiveDate, taken: &BTreeMap<NaiveDate, String>) -> Option<NaiveDate> {
    let mut date = from.succ_opt()?;
    while is_weekend(date) || taken.contains_key(&date) {
        date = date.succ_opt()?;
    }
    Some(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_ontario_is_supported() {
        assert!(OfficialCalendar::new("ON").is_ok());
        assert!(OfficialCalendar::new("on").is_ok());
        assert!(matches!(
            OfficialCalendar::new("QC"),
            Err(CalendarError::UnsupportedSubdivision(code)) if code == "QC"
        ));
    }

    #[test]
    fn boxing_day_on_saturday_adds_observed_day() {
        let calendar = OfficialCalendar::new("ON").unwrap();
        let days = calendar.holidays(2026);
        assert_eq!(days.len(), 11);
        assert_eq!(
            days.get(&NaiveDate::from_ymd_opt(2026, 12, 28).unwrap())
                .map(String::as_str),
            Some("Boxing Day (observed)")
        );
    }
}
