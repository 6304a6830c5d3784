use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Daily update: forecast, both model stages, dashboard and CSV.
    Run(RunArgs),
    /// Fetch and annotate the weather forecast without running models.
    Forecast(ForecastArgs),
    /// List day-off annotations for a date range.
    Calendar(CalendarArgs),
    /// Fetch the three models and verify their feature schemas.
    Models,
}

#[derive(Clone, Debug, Args)]
pub struct RunArgs {
    /// Directory for the dashboard and CSV export.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Forecast horizon in days.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=16))]
    pub days: Option<u32>,

    /// Use a saved JSON array of forecast rows instead of calling the weather API.
    #[arg(long, value_name = "FILE")]
    pub forecast_json: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct ForecastArgs {
    /// Forecast horizon in days.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=16))]
    pub days: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct CalendarArgs {
    /// First date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_name = "DATE")]
    pub from: Option<NaiveDate>,

    /// Number of days to list.
    #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u32).range(1..=366))]
    pub days: u32,
}
