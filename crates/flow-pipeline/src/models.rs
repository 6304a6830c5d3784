//! Fetching and binding the three registry models.

use std::path::PathBuf;

use flow_config::ModelsConfig;
use flow_core::ModelRef;
use flow_model::{FeatureVector, Model, Regressor, XgbModel};
use flow_registry::ModelSource;
use serde::Serialize;

use crate::error::{LoadError, PipelineError};
use crate::features::{DemandFeatures, TrafficFeatures};

/// Metadata about a model that was fetched and bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadedModel {
    pub model: ModelRef,
    pub path: PathBuf,
    pub objective: String,
    pub trees: usize,
    pub features: Vec<String>,
}

/// The three models a run needs, each bound to its feature schema.
#[derive(Debug)]
pub struct ModelSet {
    pub visitors: Model<DemandFeatures>,
    pub vehicles: Model<DemandFeatures>,
    pub traffic: Model<TrafficFeatures>,
}

impl ModelSet {
    #[must_use]
    pub const fn new(
        visitors: Model<DemandFeatures>,
        vehicles: Model<DemandFeatures>,
        traffic: Model<TrafficFeatures>,
    ) -> Self {
        Self {
            visitors,
            vehicles,
            traffic,
        }
    }
}

/// Fetch all three models from `source` and verify their schemas.
///
/// Models are loaded one after another; the first failure aborts.
///
/// # Errors
///
/// Returns [`PipelineError::RegistryAuthFailure`] when the registry rejects
/// the credentials and [`PipelineError::ModelLoadFailure`] for any other
/// download, parse or schema problem.
pub async fn load_models(
    source: &ModelSource,
    config: &ModelsConfig,
) -> Result<(ModelSet, Vec<LoadedModel>), PipelineError> {
    let (visitors, visitors_info) = load_one::<DemandFeatures>(source, &config.visitors).await?;
    let (vehicles, vehicles_info) = load_one::<DemandFeatures>(source, &config.vehicles).await?;
    let (traffic, traffic_info) = load_one::<TrafficFeatures>(source, &config.traffic).await?;

    Ok((
        ModelSet::new(visitors, vehicles, traffic),
        vec![visitors_info, vehicles_info, traffic_info],
    ))
}

async fn load_one<F: FeatureVector>(
    source: &ModelSource,
    model: &ModelRef,
) -> Result<(Model<F>, LoadedModel), PipelineError> {
    let path = source.fetch(model).await.map_err(|err| {
        if err.is_auth() {
            PipelineError::RegistryAuthFailure(err)
        } else {
            PipelineError::ModelLoadFailure {
                model: model.clone(),
                source: LoadError::Registry(err),
            }
        }
    })?;

    let load_failure = |err: flow_model::ModelError| PipelineError::ModelLoadFailure {
        model: model.clone(),
        source: LoadError::Model(err),
    };
    let xgb = XgbModel::from_path(&path).map_err(load_failure)?;
    let info = LoadedModel {
        model: model.clone(),
        path,
        objective: xgb.objective().to_string(),
        trees: xgb.num_trees(),
        features: F::NAMES.iter().map(ToString::to_string).collect(),
    };
    let bound = Model::bind(model.to_string(), Box::new(xgb) as Box<dyn Regressor>)
        .map_err(load_failure)?;

    tracing::info!(model = %model, trees = info.trees, objective = %info.objective, "model ready");
    Ok((bound, info))
}
