//! The two prediction stages. Each model is called once per batch.

use flow_core::{AnnotatedRow, Stage1Output, Stage2Output};
use flow_model::{FeatureVector, Model, ModelError};

use crate::error::PipelineError;
use crate::features::{DemandFeatures, TrafficFeatures};

fn predict_failure<F: FeatureVector>(
    model: &Model<F>,
) -> impl FnOnce(ModelError) -> PipelineError + '_ {
    move |source| PipelineError::ModelPredictFailure {
        model: model.name().to_string(),
        source,
    }
}

/// Add visitor and vehicle estimates to each annotated day.
///
/// # Errors
///
/// Returns [`PipelineError::ModelPredictFailure`] if either model fails or
/// returns a different number of values than rows given.
pub fn predict_stage1(
    rows: Vec<AnnotatedRow>,
    visitors: &Model<DemandFeatures>,
    vehicles: &Model<DemandFeatures>,
) -> Result<Vec<Stage1Output>, PipelineError> {
    let features: Vec<DemandFeatures> = rows.iter().map(DemandFeatures::from).collect();
    let predicted_visitors = visitors.predict(&features).map_err(predict_failure(visitors))?;
    let predicted_vehicles = vehicles.predict(&features).map_err(predict_failure(vehicles))?;

    Ok(rows
        .into_iter()
        .zip(predicted_visitors.into_iter().zip(predicted_vehicles))
        .map(|(row, (predicted_visitors, predicted_vehicles))| Stage1Output {
            row,
            predicted_visitors,
            predicted_vehicles,
        })
        .collect())
}

/// Add the traffic estimate, feeding the stage-1 estimates back in as inputs.
///
/// # Errors
///
/// Returns [`PipelineError::ModelPredictFailure`] if the model fails or
/// returns a different number of values than rows given.
pub fn predict_stage2(
    rows: Vec<Stage1Output>,
    traffic: &Model<TrafficFeatures>,
) -> Result<Vec<Stage2Output>, PipelineError> {
    let features: Vec<TrafficFeatures> = rows.iter().map(TrafficFeatures::from).collect();
    let predicted = traffic.predict(&features).map_err(predict_failure(traffic))?;

    Ok(rows
        .into_iter()
        .zip(predicted)
        .map(|(stage1, predicted_traffic_count)| Stage2Output {
            stage1,
            predicted_traffic_count,
        })
        .collect())
}
