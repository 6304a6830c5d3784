use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use flow_calendar::CalendarAnnotator;
use flow_config::FlowConfig;
use flow_core::PredictionRun;
use flow_pipeline::{PipelineContext, PipelineError, Stage, load_models};
use flow_registry::ModelSource;
use flow_report::{DashboardOptions, Summary, write_report};
use flow_weather::{ForecastSource, OpenMeteoClient, StaticForecast};
use serde::Serialize;

use crate::cli::{GlobalFlags, RunArgs};
use crate::output::output;
use crate::progress::Progress;

/// What `flowcast run` prints after writing the report.
#[derive(Debug, Serialize)]
struct RunReport {
    days: usize,
    first_date: NaiveDate,
    last_date: NaiveDate,
    avg_visitors: f64,
    avg_vehicles: f64,
    avg_traffic: f64,
    peak_date: NaiveDate,
    peak_traffic: f64,
    lowest_date: NaiveDate,
    lowest_traffic: f64,
    dashboard: PathBuf,
    csv: PathBuf,
}

impl RunReport {
    fn new(summary: Summary, dashboard: PathBuf, csv: PathBuf) -> Self {
        Self {
            days: summary.days,
            first_date: summary.first_date,
            last_date: summary.last_date,
            avg_visitors: summary.mean_visitors,
            avg_vehicles: summary.mean_vehicles,
            avg_traffic: summary.mean_traffic,
            peak_date: summary.peak.date,
            peak_traffic: summary.peak.traffic,
            lowest_date: summary.lowest.date,
            lowest_traffic: summary.lowest.traffic,
            dashboard,
            csv,
        }
    }
}

/// Handle `flowcast run`.
///
/// An empty forecast is not an error: it is logged and the run ends
/// without touching the previous report.
pub async fn handle(args: &RunArgs, config: &FlowConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = apply_overrides(config, args);

    let spinner = Progress::spinner("connecting to model registry");
    let run = match predict(&config, args, &spinner).await {
        Ok(run) => run,
        Err(error) if error.is_retryable() => {
            spinner.finish_err("no forecast available");
            tracing::warn!(%error, "skipping report; try again later");
            return Ok(());
        }
        Err(error) => {
            spinner.finish_err("pipeline failed");
            return Err(error.into());
        }
    };

    spinner.set_message("writing dashboard");
    let options = DashboardOptions {
        city: config.weather.city.clone(),
        generated_at: chrono::Local::now().naive_local(),
    };
    let paths = write_report(&run, &config.output, &options).context("failed to write report")?;
    spinner.finish_ok(&format!("dashboard written to {}", paths.html.display()));

    let summary = Summary::from_run(&run).context("prediction run is empty")?;
    output(&RunReport::new(summary, paths.html, paths.csv), flags.format)
}

fn apply_overrides(config: &FlowConfig, args: &RunArgs) -> FlowConfig {
    let mut config = config.clone();
    if let Some(days) = args.days {
        config.weather.days = days;
    }
    if let Some(dir) = &args.output_dir {
        config.output.dir = dir.display().to_string();
    }
    config
}

async fn predict(
    config: &FlowConfig,
    args: &RunArgs,
    spinner: &Progress,
) -> Result<PredictionRun, PipelineError> {
    let source = ModelSource::connect(&config.registry)
        .await
        .map_err(PipelineError::from_registry)?;
    spinner.set_message(&format!("loading models from {}", source.describe()));
    let (models, _) = load_models(&source, &config.models).await?;

    let calendar = CalendarAnnotator::from_config(&config.calendar)?;

    match &args.forecast_json {
        Some(path) => {
            let mut forecast = StaticForecast::from_json_file(path)?;
            forecast.truncate(usize::try_from(config.weather.days).unwrap_or(usize::MAX));
            execute(PipelineContext::new(models, calendar, forecast), spinner).await
        }
        None => {
            let client = OpenMeteoClient::new(config.weather.clone())?;
            execute(PipelineContext::new(models, calendar, client), spinner).await
        }
    }
}

async fn execute<S: ForecastSource>(
    ctx: PipelineContext<S>,
    spinner: &Progress,
) -> Result<PredictionRun, PipelineError> {
    ctx.run_with(|stage| spinner.set_message(stage_message(stage)))
        .await
}

const fn stage_message(stage: Stage) -> &'static str {
    match stage {
        Stage::FetchWeather => "fetching weather forecast",
        Stage::AnnotateCalendar => "annotating holidays",
        Stage::Stage1 => "predicting visitors and vehicles",
        Stage::Stage2 => "predicting traffic flow",
        Stage::Done => "predictions complete",
    }
}
