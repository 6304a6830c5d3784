//! Annotation precedence and Ontario holiday dates.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use flow_calendar::CalendarAnnotator;
use flow_config::{CalendarConfig, OverrideDate};
use flow_core::{CalendarAnnotation, ForecastRow};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn annotator() -> CalendarAnnotator {
    CalendarAnnotator::from_config(&CalendarConfig::default()).expect("ON is supported")
}

fn forecast(date: NaiveDate) -> ForecastRow {
    ForecastRow {
        date,
        temperature_2m_mean: 5.0,
        precipitation_sum: 0.0,
        wind_speed_10m_max: 10.0,
        wind_direction_10m_dominant: 180.0,
    }
}

#[rstest]
#[case(ymd(2026, 1, 1), "New Year's Day")]
#[case(ymd(2026, 2, 16), "Family Day")]
#[case(ymd(2026, 4, 3), "Good Friday")]
#[case(ymd(2026, 5, 18), "Victoria Day")]
#[case(ymd(2026, 7, 1), "Canada Day")]
#[case(ymd(2026, 8, 3), "Civic Holiday")]
#[case(ymd(2026, 9, 7), "Labour Day")]
#[case(ymd(2026, 10, 12), "Thanksgiving Day")]
#[case(ymd(2026, 12, 25), "Christmas Day")]
#[case(ymd(2026, 12, 28), "Boxing Day (observed)")]
#[case(ymd(2025, 4, 18), "Good Friday")]
#[case(ymd(2025, 5, 19), "Victoria Day")]
#[case(ymd(2022, 12, 26), "Boxing Day")]
#[case(ymd(2022, 12, 27), "Christmas Day (observed)")]
#[case(ymd(2023, 1, 2), "New Year's Day (observed)")]
#[case(ymd(2027, 12, 27), "Christmas Day (observed)")]
#[case(ymd(2027, 12, 28), "Boxing Day (observed)")]
#[case(ymd(2028, 1, 3), "New Year's Day (observed)")]
fn official_holidays(#[case] date: NaiveDate, #[case] label: &str) {
    assert_eq!(annotator().annotate(date), CalendarAnnotation::day_off(label));
}

#[rstest]
#[case(ymd(2025, 11, 28), "Black Friday")]
#[case(ymd(2025, 12, 24), "Christmas Eve")]
#[case(ymd(2025, 12, 31), "New Year's Eve")]
#[case(ymd(2026, 11, 27), "Black Friday")]
#[case(ymd(2026, 12, 24), "Christmas Eve")]
#[case(ymd(2026, 12, 31), "New Year's Eve")]
fn override_days(#[case] date: NaiveDate, #[case] label: &str) {
    assert_eq!(annotator().annotate(date), CalendarAnnotation::day_off(label));
}

#[test]
fn weekends_are_always_days_off() {
    let annotator = annotator();
    let start = ymd(2025, 1, 1);
    for (date, annotation) in annotator.annotate_range(start, 3 * 366) {
        match date.weekday() {
            Weekday::Sat => assert_eq!(annotation, CalendarAnnotation::day_off("Saturday")),
            Weekday::Sun => assert_eq!(annotation, CalendarAnnotation::day_off("Sunday")),
            _ => {}
        }
    }
}

#[test]
fn weekend_label_beats_official_holiday() {
    // Boxing Day 2026 is a Saturday; Jan 1 2028 is a Saturday.
    let annotator = annotator();
    assert_eq!(
        annotator.annotate(ymd(2026, 12, 26)),
        CalendarAnnotation::day_off("Saturday")
    );
    assert_eq!(
        annotator.annotate(ymd(2028, 1, 1)),
        CalendarAnnotation::day_off("Saturday")
    );
}

#[test]
fn official_label_beats_override() {
    let overrides = [
        OverrideDate {
            date: ymd(2026, 7, 1),
            label: "Summer Sale".into(),
        },
        OverrideDate {
            date: ymd(2026, 10, 17),
            label: "Weekend Sale".into(),
        },
    ];
    let annotator = CalendarAnnotator::new("ON", &overrides).expect("ON is supported");

    assert_eq!(
        annotator.annotate(ymd(2026, 7, 1)),
        CalendarAnnotation::day_off("Canada Day")
    );
    assert_eq!(
        annotator.annotate(ymd(2026, 10, 17)),
        CalendarAnnotation::day_off("Saturday")
    );
}

#[test]
fn plain_weekday_is_working_day() {
    assert_eq!(
        annotator().annotate(ymd(2026, 10, 21)),
        CalendarAnnotation::working_day()
    );
}

#[test]
fn seven_day_window_marks_exactly_the_weekend() {
    let start = ymd(2026, 10, 19);
    let rows: Vec<ForecastRow> = (0..7)
        .map(|offset| forecast(start.checked_add_days(Days::new(offset)).unwrap()))
        .collect();

    let annotated = annotator().annotate_rows(rows);

    assert_eq!(annotated.len(), 7);
    let labels: Vec<&str> = annotated.iter().map(|r| r.calendar.label.as_str()).collect();
    assert_eq!(labels, vec!["", "", "", "", "", "Saturday", "Sunday"]);
    let flags: Vec<u8> = annotated.iter().map(|r| r.calendar.holidays_flag()).collect();
    assert_eq!(flags, vec![0, 0, 0, 0, 0, 1, 1]);
}

#[test]
fn annotate_rows_preserves_forecast_values() {
    let row = forecast(ymd(2026, 10, 20));
    let annotated = annotator().annotate_rows(vec![row.clone()]);
    assert_eq!(annotated[0].forecast, row);
}

#[test]
fn unsupported_subdivision_is_rejected() {
    let config = CalendarConfig {
        subdivision: "BC".into(),
        ..CalendarConfig::default()
    };
    assert!(CalendarAnnotator::from_config(&config).is_err());
}
