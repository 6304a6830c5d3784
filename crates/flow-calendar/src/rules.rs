//! Date arithmetic for rule-based holidays.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Easter Sunday in the Gregorian calendar (anonymous computus).
#[must_use]
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?)
}

/// The `n`th (1-based) given weekday of a month.
#[must_use]
pub fn nth_weekday(year: i32, month: u32, weekday: Weekday, n: u8) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)
}

/// The closest given weekday strictly before `(year, month, day)`.
#[must_use]
pub fn weekday_before(year: i32, month: u32, day: u32, weekday: Weekday) -> Option<NaiveDate> {
    let anchor = NaiveDate::from_ymd_opt(year, month, day)?;
    let back = (7 + anchor.weekday().num_days_from_monday() - weekday.num_days_from_monday()) % 7;
    let back = if back == 0 { 7 } else { back };
    anchor.checked_sub_days(Days::new(u64::from(back)))
}

#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn easter_known_years() {
        assert_eq!(easter_sunday(2024), Some(ymd(2024, 3, 31)));
        assert_eq!(easter_sunday(2025), Some(ymd(2025, 4, 20)));
        assert_eq!(easter_sunday(2026), Some(ymd(2026, 4, 5)));
        assert_eq!(easter_sunday(2027), Some(ymd(2027, 3, 28)));
    }

    #[test]
    fn third_monday_of_february() {
        assert_eq!(
            nth_weekday(2026, 2, Weekday::Mon, 3),
            Some(ymd(2026, 2, 16))
        );
    }

    #[test]
    fn monday_before_may_25() {
        assert_eq!(
            weekday_before(2026, 5, 25, Weekday::Mon),
            Some(ymd(2026, 5, 18))
        );
        // May 25 2025 is a Sunday.
        assert_eq!(
            weekday_before(2025, 5, 25, Weekday::Mon),
            Some(ymd(2025, 5, 19))
        );
    }
}
