use flow_config::{API_KEY_ENV, FlowConfig};

/// Emit warnings for configuration that will fail or silently fall back to defaults.
pub fn warn_unconfigured(config: &FlowConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &FlowConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.registry.is_configured() && !config.registry.uses_local_dir() {
        warnings.push(format!(
            "No Hopsworks API key configured. Set {API_KEY_ENV} or registry.local_dir before running models."
        ));
    }

    for (section, prefix) in [
        ("registry", "FLOWCAST_REGISTRY_"),
        ("weather", "FLOWCAST_WEATHER_"),
        ("output", "FLOWCAST_OUTPUT_"),
    ] {
        let single_underscore = env_keys
            .iter()
            .any(|key| key.starts_with(prefix) && !key[prefix.len()..].starts_with('_'));
        if single_underscore {
            warnings.push(format!(
                "{prefix}* env vars are ignored for [{section}]. Use double underscores (example: {prefix}_{}).",
                example_field(section)
            ));
        }
    }

    warnings
}

fn example_field(section: &str) -> &'static str {
    match section {
        "registry" => "PROJECT",
        "weather" => "DAYS",
        _ => "DIR",
    }
}
