//! Model registry configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Value used when no API key was supplied.
pub const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY_HERE";

fn default_api_key() -> String {
    String::from(API_KEY_PLACEHOLDER)
}

fn default_host() -> String {
    String::from("https://c.app.hopsworks.ai")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistryConfig {
    /// Hopsworks API key. Also read from `HOPSWORKS_API_KEY`.
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// Hopsworks base URL.
    #[serde(default = "default_host")]
    pub host: String,

    /// Project name. Empty means the first project the key can access.
    #[serde(default)]
    pub project: String,

    /// Where downloaded model files are cached. Empty uses the user cache dir.
    #[serde(default)]
    pub download_dir: String,

    /// Load models from `<local_dir>/<name>/<version>/model.json` instead of Hopsworks.
    #[serde(default)]
    pub local_dir: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            host: default_host(),
            project: String::new(),
            download_dir: String::new(),
            local_dir: String::new(),
        }
    }
}

impl RegistryConfig {
    /// A real API key was provided (not empty, not the placeholder).
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && self.api_key != API_KEY_PLACEHOLDER
    }

    #[must_use]
    pub fn uses_local_dir(&self) -> bool {
        !self.local_dir.is_empty()
    }

    /// Resolved model download directory.
    #[must_use]
    pub fn download_path(&self) -> PathBuf {
        if self.download_dir.is_empty() {
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("flowcast")
                .join("models")
        } else {
            PathBuf::from(&self.download_dir)
        }
    }
}
