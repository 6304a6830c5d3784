use chrono::NaiveDate;
use flow_calendar::CalendarAnnotator;
use flow_config::FlowConfig;
use serde::Serialize;

use crate::cli::{CalendarArgs, GlobalFlags};
use crate::output::output;

#[derive(Debug, Serialize)]
struct CalendarDay {
    date: NaiveDate,
    weekday: String,
    is_day_off: bool,
    label: String,
}

/// Handle `flowcast calendar`.
pub fn handle(args: &CalendarArgs, config: &FlowConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let annotator = CalendarAnnotator::from_config(&config.calendar)?;
    let start = args
        .from
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let days = annotator
        .annotate_range(start, args.days)
        .into_iter()
        .map(|(date, annotation)| CalendarDay {
            date,
            weekday: date.format("%a").to_string(),
            is_day_off: annotation.is_day_off,
            label: annotation.label,
        })
        .collect::<Vec<_>>();

    output(&days, flags.format)
}
