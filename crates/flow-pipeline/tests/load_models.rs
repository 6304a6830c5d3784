use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use flow_calendar::CalendarAnnotator;
use flow_config::ModelsConfig;
use flow_core::{ForecastRow, ModelRef};
use flow_model::{FeatureVector, ModelError};
use flow_pipeline::{
    DemandFeatures, LoadError, PipelineContext, PipelineError, TrafficFeatures, load_models,
};
use flow_registry::{LocalRegistry, ModelSource};
use flow_weather::StaticForecast;
use pretty_assertions::assert_eq;
use serde_json::json;

/// A single-leaf model that always predicts `value`.
fn constant_model(names: &[&str], value: f64) -> String {
    json!({
        "learner": {
            "feature_names": names,
            "gradient_booster": {
                "name": "gbtree",
                "model": {
                    "trees": [{
                        "left_children": [-1],
                        "right_children": [-1],
                        "split_indices": [0],
                        "split_conditions": [0.0],
                        "default_left": [0],
                        "split_type": [0]
                    }]
                }
            },
            "learner_model_param": {
                "base_score": format!("[{value:E}]"),
                "num_class": "0",
                "num_feature": names.len().to_string(),
                "num_target": "1"
            },
            "objective": { "name": "reg:squarederror" }
        },
        "version": [2, 1, 0]
    })
    .to_string()
}

fn write_model(root: &Path, model: &ModelRef, body: &str) {
    let dir = root.join(&model.name).join(model.version.to_string());
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("model.json"), body).unwrap();
}

fn seed_registry(root: &Path, config: &ModelsConfig, traffic_names: &[&str]) {
    write_model(root, &config.visitors, &constant_model(DemandFeatures::NAMES, 100.0));
    write_model(root, &config.vehicles, &constant_model(DemandFeatures::NAMES, 50.0));
    write_model(root, &config.traffic, &constant_model(traffic_names, 30.0));
}

#[tokio::test]
async fn loads_bound_models_from_local_registry() {
    let dir = tempfile::tempdir().unwrap();
    let config = ModelsConfig::default();
    seed_registry(dir.path(), &config, TrafficFeatures::NAMES);
    let source = ModelSource::Local(LocalRegistry::new(dir.path()));

    let (models, info) = load_models(&source, &config).await.unwrap();
    let names: Vec<String> = info.iter().map(|m| m.model.to_string()).collect();
    assert_eq!(
        names,
        vec![
            "traffic_flow_visitors_xgboost_model v4",
            "traffic_flow_vehicles_xgboost_model v4",
            "traffic_flow_xgboost_model v7",
        ]
    );
    assert_eq!(info[2].features.len(), 7);
    assert_eq!(info[0].trees, 1);
    assert_eq!(info[0].objective, "reg:squarederror");

    let day = NaiveDate::from_ymd_opt(2026, 10, 21).unwrap();
    let ctx = PipelineContext::new(
        models,
        CalendarAnnotator::new("ON", &[]).unwrap(),
        StaticForecast::new(vec![ForecastRow {
            date: day,
            temperature_2m_mean: 8.0,
            precipitation_sum: 0.0,
            wind_speed_10m_max: 20.0,
            wind_direction_10m_dominant: 300.0,
        }]),
    );
    let run = ctx.run().await.unwrap();
    let row = &run.rows()[0];
    assert_eq!(row.stage1.predicted_visitors, 100.0);
    assert_eq!(row.stage1.predicted_vehicles, 50.0);
    assert_eq!(row.predicted_traffic_count, 30.0);
}

#[tokio::test]
async fn traffic_model_with_stage1_schema_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let config = ModelsConfig::default();
    seed_registry(dir.path(), &config, DemandFeatures::NAMES);
    let source = ModelSource::Local(LocalRegistry::new(dir.path()));

    let err = load_models(&source, &config).await.unwrap_err();
    match err {
        PipelineError::ModelLoadFailure { model, source } => {
            assert_eq!(model, config.traffic);
            assert!(matches!(
                source,
                LoadError::Model(ModelError::SchemaMismatch { .. })
            ));
        }
        other => panic!("expected load failure, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_artifact_is_a_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    let source = ModelSource::Local(LocalRegistry::new(dir.path()));
    let err = load_models(&source, &ModelsConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        PipelineError::ModelLoadFailure {
            source: LoadError::Registry(_),
            ..
        }
    ));
    assert!(!err.is_retryable());
}
