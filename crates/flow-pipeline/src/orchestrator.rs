//! Runs the stages in order against one context.

use std::fmt;

use flow_calendar::CalendarAnnotator;
use flow_core::PredictionRun;
use flow_weather::ForecastSource;

use crate::error::PipelineError;
use crate::models::ModelSet;
use crate::stage::{predict_stage1, predict_stage2};

/// Pipeline progress, reported to the observer on entry to each stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    FetchWeather,
    AnnotateCalendar,
    Stage1,
    Stage2,
    Done,
}

impl Stage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FetchWeather => "fetch-weather",
            Self::AnnotateCalendar => "annotate-calendar",
            Self::Stage1 => "stage1",
            Self::Stage2 => "stage2",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything one run needs. Built fresh per run and never shared.
pub struct PipelineContext<S> {
    models: ModelSet,
    calendar: CalendarAnnotator,
    source: S,
}

impl<S: ForecastSource> PipelineContext<S> {
    pub const fn new(models: ModelSet, calendar: CalendarAnnotator, source: S) -> Self {
        Self {
            models,
            calendar,
            source,
        }
    }

    /// Run all stages without progress reporting.
    ///
    /// # Errors
    ///
    /// See [`Self::run_with`].
    pub async fn run(&self) -> Result<PredictionRun, PipelineError> {
        self.run_with(|_| {}).await
    }

    /// Run all stages, calling `observer` as each one starts.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::ForecastUnavailable`] if the forecast is
    /// empty, and the first stage error otherwise.
    pub async fn run_with(
        &self,
        mut observer: impl FnMut(Stage),
    ) -> Result<PredictionRun, PipelineError> {
        let mut enter = |stage: Stage| {
            tracing::info!(stage = %stage, "pipeline stage");
            observer(stage);
        };

        enter(Stage::FetchWeather);
        let forecast = self.source.fetch_forecast().await?;
        if forecast.is_empty() {
            tracing::warn!("weather provider returned no complete days");
            return Err(PipelineError::ForecastUnavailable {
                reason: "weather provider returned no complete days".to_string(),
            });
        }
        tracing::debug!(days = forecast.len(), "forecast fetched");

        enter(Stage::AnnotateCalendar);
        let annotated = self.calendar.annotate_rows(forecast);

        enter(Stage::Stage1);
        let stage1 = predict_stage1(annotated, &self.models.visitors, &self.models.vehicles)?;

        enter(Stage::Stage2);
        let stage2 = predict_stage2(stage1, &self.models.traffic)?;
        let run = PredictionRun::new(stage2)?;

        enter(Stage::Done);
        if let (Some(mean), Some(peak)) = (run.mean_traffic(), run.peak_traffic()) {
            tracing::info!(
                days = run.len(),
                mean_traffic = mean,
                peak_date = %peak.date(),
                "pipeline complete"
            );
        }
        Ok(run)
    }
}
