//! # flow-config
//!
//! Layered configuration loading for flowcast using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FLOWCAST_*` prefix, `__` as separator)
//! 2. `HOPSWORKS_API_KEY` (mapped to `registry.api_key`)
//! 3. An explicit config file (`--config`)
//! 4. Project-level `./flowcast.toml`
//! 5. User-level `~/.config/flowcast/config.toml`
//! 6. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FLOWCAST_REGISTRY__PROJECT` -> `registry.project`,
//! `FLOWCAST_WEATHER__DAYS` -> `weather.days`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use flow_config::FlowConfig;
//!
//! let config = FlowConfig::load_with_dotenv(None).expect("config");
//! if !config.registry.is_configured() {
//!     eprintln!("HOPSWORKS_API_KEY is not set");
//! }
//! ```

mod calendar;
mod error;
mod models;
mod output;
mod registry;
mod weather;

pub use calendar::{CalendarConfig, OverrideDate};
pub use error::ConfigError;
pub use models::ModelsConfig;
pub use output::OutputConfig;
pub use registry::{API_KEY_PLACEHOLDER, RegistryConfig};
pub use weather::WeatherConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the Hopsworks API key.
pub const API_KEY_ENV: &str = "HOPSWORKS_API_KEY";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FlowConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub models: ModelsConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl FlowConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(extra).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(extra)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment(extra: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from("flowcast.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit config file
        if let Some(path) = extra {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: The bare API key variable
        figment = figment.merge(
            Env::raw()
                .only(&[API_KEY_ENV])
                .map(|_| "registry.api_key".into()),
        );

        // Layer 5: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("FLOWCAST_").split("__"));

        figment
    }

    /// Reject values the pipeline cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weather.days == 0 || self.weather.days > 16 {
            return Err(ConfigError::InvalidValue {
                field: "weather.days".into(),
                reason: format!("must be between 1 and 16, got {}", self.weather.days),
            });
        }
        if !(-90.0..=90.0).contains(&self.weather.latitude) {
            return Err(ConfigError::InvalidValue {
                field: "weather.latitude".into(),
                reason: format!("out of range: {}", self.weather.latitude),
            });
        }
        if !(-180.0..=180.0).contains(&self.weather.longitude) {
            return Err(ConfigError::InvalidValue {
                field: "weather.longitude".into(),
                reason: format!("out of range: {}", self.weather.longitude),
            });
        }
        if self.output.dir.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output.dir".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("flowcast").join("config.toml"))
    }
}
