use figment::Jail;
use flow_config::{API_KEY_PLACEHOLDER, FlowConfig};

#[test]
fn api_key_defaults_to_placeholder() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        let config = FlowConfig::load(None).expect("config loads");
        assert_eq!(config.registry.api_key, API_KEY_PLACEHOLDER);
        assert!(!config.registry.is_configured());
        Ok(())
    });
}

#[test]
fn hopsworks_api_key_fills_registry() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("HOPSWORKS_API_KEY", "key_from_env");
        let config = FlowConfig::load(None).expect("config loads");
        assert_eq!(config.registry.api_key, "key_from_env");
        assert!(config.registry.is_configured());
        Ok(())
    });
}

#[test]
fn prefixed_env_beats_bare_api_key() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("HOPSWORKS_API_KEY", "bare");
        jail.set_env("FLOWCAST_REGISTRY__API_KEY", "prefixed");
        let config = FlowConfig::load(None).expect("config loads");
        assert_eq!(config.registry.api_key, "prefixed");
        Ok(())
    });
}

#[test]
fn nested_sections_split_on_double_underscore() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("FLOWCAST_WEATHER__DAYS", "3");
        jail.set_env("FLOWCAST_REGISTRY__PROJECT", "traffic");
        let config = FlowConfig::load(None).expect("config loads");
        assert_eq!(config.weather.days, 3);
        assert_eq!(config.registry.project, "traffic");
        Ok(())
    });
}
