use chrono::{NaiveDate, NaiveDateTime};
use flow_config::OutputConfig;
use flow_core::{
    AnnotatedRow, CalendarAnnotation, ForecastRow, PredictionRun, Stage1Output, Stage2Output,
};
use flow_report::{DashboardOptions, ReportError, Summary, render_dashboard, write_csv, write_report};
use pretty_assertions::assert_eq;

fn row(day: u32, label: &str, visitors: f64, vehicles: f64, traffic: f64) -> Stage2Output {
    let calendar = if label.is_empty() {
        CalendarAnnotation::working_day()
    } else {
        CalendarAnnotation::day_off(label)
    };
    Stage2Output {
        stage1: Stage1Output {
            row: AnnotatedRow {
                forecast: ForecastRow {
                    date: NaiveDate::from_ymd_opt(2026, 12, day).unwrap(),
                    temperature_2m_mean: -2.5,
                    precipitation_sum: 0.4,
                    wind_speed_10m_max: 21.0,
                    wind_direction_10m_dominant: 290.0,
                },
                calendar,
            },
            predicted_visitors: visitors,
            predicted_vehicles: vehicles,
        },
        predicted_traffic_count: traffic,
    }
}

fn sample_run() -> PredictionRun {
    PredictionRun::new(vec![
        row(24, "", 1200.0, 800.0, 15_000.0),
        row(25, "Christmas Day", 3500.0, 2100.0, 42_500.0),
        row(26, "Saturday", 2900.0, 1900.0, 38_000.0),
        row(27, "Sunday", 2700.0, 1700.0, 9_000.0),
    ])
    .unwrap()
}

fn options() -> DashboardOptions {
    DashboardOptions {
        city: "Toronto".into(),
        generated_at: NaiveDateTime::parse_from_str("2026-12-23 06:00:00", "%Y-%m-%d %H:%M:%S")
            .unwrap(),
    }
}

#[test]
fn csv_has_flat_columns_in_order() {
    let mut buf = Vec::new();
    write_csv(&sample_run(), &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines[0],
        "date,temperature_2m_mean,precipitation_sum,wind_speed_10m_max,wind_direction_10m_dominant,holidays,holiday_name,predicted_visitors,predicted_vehicles,predicted_traffic_count"
    );
    assert_eq!(
        lines[2],
        "2026-12-25,-2.5,0.4,21.0,290.0,1,Christmas Day,3500.0,2100.0,42500.0"
    );
    assert_eq!(lines.len(), 5);
}

#[test]
fn summary_picks_peak_and_lowest() {
    let summary = Summary::from_run(&sample_run()).unwrap();
    assert_eq!(summary.days, 4);
    assert_eq!(summary.peak.date, NaiveDate::from_ymd_opt(2026, 12, 25).unwrap());
    assert_eq!(summary.peak.label, "Christmas Day");
    assert_eq!(summary.lowest.date, NaiveDate::from_ymd_opt(2026, 12, 27).unwrap());
    assert_eq!(summary.mean_visitors, 2575.0);
}

#[test]
fn dashboard_contains_stats_table_and_charts() {
    let html = render_dashboard(&sample_run(), &options()).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Last Updated: 2026-12-23 06:00:00"));
    assert!(html.contains("Toronto Traffic Flow Predictions"));
    assert!(html.contains("4-Day Forecast Dashboard"));
    // mean traffic (15000 + 42500 + 38000 + 9000) / 4
    assert!(html.contains(r#"<div class="value">26,125</div>"#));
    assert!(html.contains("<strong>2026-12-25</strong> (Christmas Day) - Expected traffic: <strong>42,500</strong>"));
    assert_eq!(html.matches("data:image/svg+xml;base64,").count(), 3);
    assert_eq!(html.matches(r#"<tr class="holiday-row">"#).count(), 3);
    assert!(html.contains("<td>-2.5&deg;C</td>"));
}

#[test]
fn city_name_is_escaped() {
    let mut opts = options();
    opts.city = "<Toronto & GTA>".into();
    let html = render_dashboard(&sample_run(), &opts).unwrap();
    assert!(html.contains("&lt;Toronto &amp; GTA&gt; Traffic Flow Predictions"));
    assert!(!html.contains("<Toronto"));
}

#[test]
fn empty_run_is_rejected() {
    let empty = PredictionRun::new(Vec::new()).unwrap();
    assert!(matches!(
        render_dashboard(&empty, &options()),
        Err(ReportError::EmptyRun)
    ));
}

#[test]
fn report_files_are_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let output = OutputConfig {
        dir: dir.path().join("dashboard").to_string_lossy().into_owned(),
        ..Default::default()
    };

    let first = write_report(&sample_run(), &output, &options()).unwrap();
    let html_a = std::fs::read(&first.html).unwrap();
    let csv_a = std::fs::read(&first.csv).unwrap();

    let second = write_report(&sample_run(), &output, &options()).unwrap();
    assert_eq!(first, second);
    assert_eq!(std::fs::read(&second.html).unwrap(), html_a);
    assert_eq!(std::fs::read(&second.csv).unwrap(), csv_a);

    assert!(first.html.ends_with("traffic_dashboard.html"));
    assert_eq!(
        first.csv.file_name().unwrap().to_string_lossy(),
        "predictions_20261223.csv"
    );
}
