//! # flow-report
//!
//! Turns a [`PredictionRun`] into files people read:
//!
//! - `traffic_dashboard.html`: stat cards, peak and lowest days, three SVG
//!   line charts embedded as `data:` URIs, and a daily table.
//! - `predictions_<YYYYMMDD>.csv`: one flat row per day.
//!
//! Output depends only on the run and the timestamp passed in.

mod chart;
mod csv_export;
mod error;
mod format;
mod html;
mod summary;

use std::path::PathBuf;

use flow_config::OutputConfig;
use flow_core::PredictionRun;

pub use chart::{LineChart, Marker};
pub use csv_export::{write_csv, write_csv_file};
pub use error::ReportError;
pub use format::{escape, thousands};
pub use html::{DashboardOptions, charts, render_dashboard};
pub use summary::{DayHighlight, Summary};

/// Files written by [`write_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub html: PathBuf,
    pub csv: PathBuf,
}

/// Write the dashboard and CSV export into `output.dir`, creating it if needed.
///
/// The CSV name uses the date of `options.generated_at`.
///
/// # Errors
///
/// Returns [`ReportError::EmptyRun`] for an empty run, or an I/O or CSV
/// error if a file cannot be written.
pub fn write_report(
    run: &PredictionRun,
    output: &OutputConfig,
    options: &DashboardOptions,
) -> Result<ReportPaths, ReportError> {
    if run.is_empty() {
        return Err(ReportError::EmptyRun);
    }
    std::fs::create_dir_all(output.dir_path())?;

    let html = output.html_path();
    std::fs::write(&html, render_dashboard(run, options)?)?;
    tracing::info!(path = %html.display(), "dashboard written");

    let csv = output.csv_path(options.generated_at.date());
    write_csv_file(run, &csv)?;
    tracing::info!(path = %csv.display(), rows = run.len(), "predictions exported");

    Ok(ReportPaths { html, csv })
}
