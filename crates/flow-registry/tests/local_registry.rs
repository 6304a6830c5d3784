use std::fs;

use flow_config::RegistryConfig;
use flow_core::ModelRef;
use flow_registry::{LocalRegistry, ModelSource, RegistryError};
use pretty_assertions::assert_eq;

fn seed(root: &std::path::Path, name: &str, version: u32) {
    let dir = root.join(name).join(version.to_string());
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("model.json"), "{}").unwrap();
}

#[tokio::test]
async fn local_dir_overrides_remote_registry() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path(), "traffic_flow_xgboost_model", 7);

    let config = RegistryConfig {
        local_dir: dir.path().to_string_lossy().into_owned(),
        ..Default::default()
    };
    let source = ModelSource::connect(&config).await.unwrap();
    assert!(matches!(source, ModelSource::Local(_)));
    assert!(source.describe().starts_with("local:"));

    let path = source
        .fetch(&ModelRef::new("traffic_flow_xgboost_model", 7))
        .await
        .unwrap();
    assert_eq!(
        path,
        dir.path()
            .join("traffic_flow_xgboost_model")
            .join("7")
            .join("model.json")
    );
}

#[tokio::test]
async fn wrong_version_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path(), "visitors", 4);

    let source = ModelSource::Local(LocalRegistry::new(dir.path()));
    let err = source.fetch(&ModelRef::new("visitors", 3)).await.unwrap_err();
    assert!(matches!(err, RegistryError::ModelNotFound(_)));
}

#[tokio::test]
async fn unconfigured_remote_is_auth_error() {
    let err = ModelSource::connect(&RegistryConfig::default())
        .await
        .unwrap_err();
    assert!(err.is_auth());
}

#[test]
fn list_skips_incomplete_entries() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path(), "vehicles", 4);
    seed(dir.path(), "visitors", 4);
    seed(dir.path(), "visitors", 2);
    fs::create_dir_all(dir.path().join("visitors").join("latest")).unwrap();
    fs::create_dir_all(dir.path().join("empty").join("1")).unwrap();
    fs::write(dir.path().join("README"), "not a model").unwrap();

    let listed = LocalRegistry::new(dir.path()).list().unwrap();
    assert_eq!(
        listed,
        vec![
            ModelRef::new("vehicles", 4),
            ModelRef::new("visitors", 2),
            ModelRef::new("visitors", 4),
        ]
    );
}

#[tokio::test]
#[ignore = "requires HOPSWORKS_API_KEY and network access"]
async fn live_login_resolves_a_project() {
    let config = flow_config::FlowConfig::load_with_dotenv(None).unwrap();
    let source = ModelSource::connect(&config.registry).await.unwrap();
    assert!(source.describe().starts_with("hopsworks:"));
}
