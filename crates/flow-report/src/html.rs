//! The self-contained HTML dashboard.

use std::fmt::Write as _;

use chrono::NaiveDateTime;
use flow_core::PredictionRun;

use crate::chart::{LineChart, Marker};
use crate::error::ReportError;
use crate::format::{escape, thousands};
use crate::summary::{DayHighlight, Summary};

pub const VISITORS_COLOR: &str = "#2E86AB";
pub const VEHICLES_COLOR: &str = "#A23B72";
pub const TRAFFIC_COLOR: &str = "#F18F01";

const STYLE: &str = r"
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); min-height: 100vh; padding: 20px; }
.container { max-width: 1400px; margin: 0 auto; background: white; border-radius: 20px; box-shadow: 0 20px 60px rgba(0,0,0,0.3); overflow: hidden; }
.header { background: linear-gradient(135deg, #2E86AB 0%, #1a4d6b 100%); color: white; padding: 40px; text-align: center; }
.header h1 { font-size: 2.5em; margin-bottom: 10px; }
.header .subtitle { font-size: 1.2em; opacity: 0.9; }
.header .update-time { margin-top: 15px; font-size: 0.9em; opacity: 0.8; }
.stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: 20px; padding: 40px; background: #f8f9fa; }
.stat-card { background: white; padding: 25px; border-radius: 15px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); text-align: center; }
.stat-card .icon { font-size: 3em; margin-bottom: 10px; }
.stat-card .value { font-size: 2em; font-weight: bold; margin: 10px 0; }
.stat-card .label { color: #666; font-size: 1em; }
.stat-card.visitors .value { color: #2E86AB; }
.stat-card.vehicles .value { color: #A23B72; }
.stat-card.traffic .value { color: #F18F01; }
.highlights { padding: 0 40px; }
.highlight { background: linear-gradient(120deg, #84fab0 0%, #8fd3f4 100%); padding: 20px; border-radius: 10px; margin: 20px 0; }
.highlight h3 { margin-bottom: 10px; }
.charts-section { padding: 40px; }
.chart-container { margin-bottom: 40px; background: white; border-radius: 15px; padding: 20px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); }
.chart-container h2 { color: #333; margin-bottom: 20px; padding-bottom: 10px; border-bottom: 3px solid #2E86AB; }
.chart-container img { width: 100%; height: auto; border-radius: 10px; }
.table-section { padding: 40px; background: #f8f9fa; }
.table-section h2 { color: #333; margin-bottom: 20px; }
table { width: 100%; background: white; border-radius: 10px; overflow: hidden; box-shadow: 0 4px 6px rgba(0,0,0,0.1); }
thead { background: linear-gradient(135deg, #2E86AB 0%, #1a4d6b 100%); color: white; }
th, td { padding: 15px; text-align: center; }
tbody tr:nth-child(even) { background: #f8f9fa; }
.holiday-row { background: #fff3cd !important; font-weight: bold; }
.footer { background: #333; color: white; text-align: center; padding: 20px; font-size: 0.9em; }
@media (max-width: 768px) { .stats-grid { grid-template-columns: 1fr; } .header h1 { font-size: 1.8em; } }
";

/// Inputs to the dashboard that do not come from the run itself.
#[derive(Debug, Clone)]
pub struct DashboardOptions {
    pub city: String,
    pub generated_at: NaiveDateTime,
}

/// The three charts in display order: visitors, vehicles, traffic.
#[must_use]
pub fn charts(run: &PredictionRun) -> [LineChart; 3] {
    let days = run.len();
    let series = |value: fn(&flow_core::Stage2Output) -> f64| {
        run.rows().iter().map(|r| (r.date(), value(r))).collect::<Vec<_>>()
    };
    [
        LineChart {
            title: format!("Predicted Visitors - Next {days} Days"),
            y_label: "Visitor Count".into(),
            legend: "Predicted Visitors".into(),
            color: VISITORS_COLOR,
            marker: Marker::Circle,
            points: series(|r| r.stage1.predicted_visitors),
        },
        LineChart {
            title: format!("Predicted Vehicles - Next {days} Days"),
            y_label: "Vehicle Count".into(),
            legend: "Predicted Vehicles".into(),
            color: VEHICLES_COLOR,
            marker: Marker::Square,
            points: series(|r| r.stage1.predicted_vehicles),
        },
        LineChart {
            title: format!("Predicted Traffic Flow - Next {days} Days"),
            y_label: "Traffic Count".into(),
            legend: "Predicted Traffic".into(),
            color: TRAFFIC_COLOR,
            marker: Marker::Diamond,
            points: series(|r| r.predicted_traffic_count),
        },
    ]
}

/// Render the full dashboard page.
///
/// # Errors
///
/// Returns [`ReportError::EmptyRun`] if `run` has no rows.
pub fn render_dashboard(run: &PredictionRun, options: &DashboardOptions) -> Result<String, ReportError> {
    let summary = Summary::from_run(run).ok_or(ReportError::EmptyRun)?;
    let [visitors, vehicles, traffic] = charts(run);
    let city = escape(&options.city);

    let mut html = String::with_capacity(64 * 1024);
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{city} Traffic Flow Predictions Dashboard</title>
<style>{STYLE}</style>
</head>
<body>
<div class="container">
<div class="header">
<h1>&#x1F6A6; {city} Traffic Flow Predictions</h1>
<div class="subtitle">{days}-Day Forecast Dashboard</div>
<div class="update-time">Last Updated: {updated}</div>
</div>
<div class="stats-grid">
{visitors_card}
{vehicles_card}
{traffic_card}
</div>
<div class="highlights">
{peak}
{lowest}
</div>
<div class="charts-section">
{visitors_chart}
{vehicles_chart}
{traffic_chart}
</div>
"#,
        days = summary.days,
        updated = options.generated_at.format("%Y-%m-%d %H:%M:%S"),
        visitors_card = stat_card("visitors", "&#x1F465;", summary.mean_visitors, "Avg Daily Visitors"),
        vehicles_card = stat_card("vehicles", "&#x1F697;", summary.mean_vehicles, "Avg Daily Vehicles"),
        traffic_card = stat_card("traffic", "&#x1F6A6;", summary.mean_traffic, "Avg Traffic Flow"),
        peak = highlight("&#x1F4C8; Peak Traffic Day", &summary.peak),
        lowest = highlight("&#x1F4C9; Lowest Traffic Day", &summary.lowest),
        visitors_chart = chart_block("&#x1F465; Visitor Predictions", &visitors, "Visitors Prediction Chart"),
        vehicles_chart = chart_block("&#x1F697; Vehicle Predictions", &vehicles, "Vehicles Prediction Chart"),
        traffic_chart = chart_block("&#x1F6A6; Traffic Flow Predictions", &traffic, "Traffic Flow Prediction Chart"),
    );

    html.push_str(
        r#"<div class="table-section">
<h2>&#x1F4C5; Daily Predictions Breakdown</h2>
<table>
<thead><tr><th>Date</th><th>Holiday</th><th>Visitors</th><th>Vehicles</th><th>Traffic Flow</th><th>Temperature</th></tr></thead>
<tbody>
"#,
    );
    for row in run {
        let calendar = row.calendar();
        let (class, badge) = if calendar.is_day_off {
            (" class=\"holiday-row\"", format!("&#x1F389; {}", escape(&calendar.label)))
        } else {
            ("", String::new())
        };
        let _ = writeln!(
            html,
            "<tr{class}><td>{date}</td><td>{badge}</td><td>{visitors}</td><td>{vehicles}</td><td>{traffic}</td><td>{temp:.1}&deg;C</td></tr>",
            date = row.date(),
            visitors = thousands(row.stage1.predicted_visitors),
            vehicles = thousands(row.stage1.predicted_vehicles),
            traffic = thousands(row.predicted_traffic_count),
            temp = row.forecast().temperature_2m_mean,
        );
    }
    let _ = write!(
        html,
        r#"</tbody>
</table>
</div>
<div class="footer">
<p>{city} Traffic Flow Prediction System</p>
<p>Two-Stage Prediction Model: Weather &rarr; Visitors/Vehicles &rarr; Traffic Flow</p>
</div>
</div>
</body>
</html>
"#
    );
    Ok(html)
}

fn stat_card(class: &str, icon: &str, value: f64, label: &str) -> String {
    format!(
        r#"<div class="stat-card {class}"><div class="icon">{icon}</div><div class="value">{value}</div><div class="label">{label}</div></div>"#,
        value = thousands(value),
    )
}

fn highlight(heading: &str, day: &DayHighlight) -> String {
    let label = if day.label.is_empty() {
        String::new()
    } else {
        format!(" ({})", escape(&day.label))
    };
    format!(
        r#"<div class="highlight"><h3>{heading}</h3><p><strong>{date}</strong>{label} - Expected traffic: <strong>{traffic}</strong></p></div>"#,
        date = day.date,
        traffic = thousands(day.traffic),
    )
}

fn chart_block(heading: &str, chart: &LineChart, alt: &str) -> String {
    format!(
        r#"<div class="chart-container"><h2>{heading}</h2><img src="{src}" alt="{alt}"></div>"#,
        src = chart.to_data_uri(),
    )
}
