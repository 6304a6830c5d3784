use anyhow::Context;
use flow_config::FlowConfig;
use flow_core::ModelRef;
use flow_pipeline::{LoadedModel, PipelineError, load_models};
use flow_registry::ModelSource;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct ModelRow {
    name: String,
    version: u32,
    objective: String,
    trees: usize,
    features: Vec<String>,
    path: String,
}

impl From<LoadedModel> for ModelRow {
    fn from(m: LoadedModel) -> Self {
        Self {
            name: m.model.name,
            version: m.model.version,
            objective: m.objective,
            trees: m.trees,
            features: m.features,
            path: m.path.display().to_string(),
        }
    }
}

/// Handle `flowcast models`.
pub async fn handle(config: &FlowConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner("connecting to model registry");
    let info = match check_models(config, &spinner).await {
        Ok(info) => info,
        Err(error) => {
            spinner.finish_err("model check failed");
            return Err(error);
        }
    };
    spinner.finish_clear();

    let rows = info.into_iter().map(ModelRow::from).collect::<Vec<_>>();
    output(&rows, flags.format)
}

async fn check_models(
    config: &FlowConfig,
    spinner: &Progress,
) -> anyhow::Result<Vec<LoadedModel>> {
    let source = ModelSource::connect(&config.registry)
        .await
        .map_err(PipelineError::from_registry)?;
    spinner.set_message(&format!("loading models from {}", source.describe()));

    let ModelSource::Local(registry) = &source else {
        let (_, info) = load_models(&source, &config.models).await?;
        return Ok(info);
    };

    let present = registry.list().map_err(PipelineError::from_registry)?;
    tracing::info!(
        root = %registry.root().display(),
        models = present.len(),
        "local registry contents"
    );
    let (_, info) = load_models(&source, &config.models)
        .await
        .with_context(|| available_note(&present))?;
    Ok(info)
}

fn available_note(present: &[ModelRef]) -> String {
    if present.is_empty() {
        return "local registry holds no models".to_string();
    }
    let listed = present.iter().map(ToString::to_string).collect::<Vec<_>>();
    format!("local registry holds: {}", listed.join(", "))
}
