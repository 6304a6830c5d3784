use flow_calendar::CalendarAnnotator;
use flow_config::FlowConfig;
use flow_weather::OpenMeteoClient;

use crate::cli::{ForecastArgs, GlobalFlags};
use crate::output::output;
use crate::progress::Progress;

/// Handle `flowcast forecast`.
pub async fn handle(args: &ForecastArgs, config: &FlowConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut weather = config.weather.clone();
    if let Some(days) = args.days {
        weather.days = days;
    }
    let annotator = CalendarAnnotator::from_config(&config.calendar)?;
    let client = OpenMeteoClient::new(weather)?;

    let spinner = Progress::spinner("fetching weather forecast");
    let rows = match client.daily_forecast().await {
        Ok(rows) => rows,
        Err(error) => {
            spinner.finish_err("weather request failed");
            return Err(error.into());
        }
    };
    spinner.finish_clear();

    if rows.is_empty() {
        tracing::warn!("weather provider returned no complete days");
    }
    output(&annotator.annotate_rows(rows), flags.format)
}
