//! # flow-registry
//!
//! Model artifact sources for flowcast.
//!
//! - [`HopsworksSession`]: the Hopsworks model registry over REST, with a
//!   local download cache.
//! - [`LocalRegistry`]: a plain directory of `<name>/<version>/model.json`
//!   files, used offline and in tests.
//!
//! [`ModelSource`] picks one from [`RegistryConfig`].

mod error;
mod hopsworks;
mod http;
mod local;

use std::path::PathBuf;

use flow_config::RegistryConfig;
use flow_core::ModelRef;

pub use error::RegistryError;
pub use hopsworks::{HopsworksSession, Project};
pub use local::LocalRegistry;

/// File name of a serialized model inside a version directory.
pub const MODEL_FILE: &str = "model.json";

/// Where model artifacts come from.
#[derive(Debug, Clone)]
pub enum ModelSource {
    Hopsworks(HopsworksSession),
    Local(LocalRegistry),
}

impl ModelSource {
    /// Build a source from configuration. A configured `local_dir` wins
    /// over the remote registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the remote login fails.
    pub async fn connect(config: &RegistryConfig) -> Result<Self, RegistryError> {
        if config.uses_local_dir() {
            tracing::info!(dir = %config.local_dir, "using local model directory");
            return Ok(Self::Local(LocalRegistry::new(&config.local_dir)));
        }
        HopsworksSession::login(config).await.map(Self::Hopsworks)
    }

    /// Resolve `model` to a `model.json` file on local disk.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the artifact cannot be found or fetched.
    pub async fn fetch(&self, model: &ModelRef) -> Result<PathBuf, RegistryError> {
        match self {
            Self::Hopsworks(session) => session.download(model).await,
            Self::Local(registry) => registry.locate(model),
        }
    }

    /// Short label for logs and CLI output.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Hopsworks(session) => format!("hopsworks:{}", session.project().name),
            Self::Local(registry) => format!("local:{}", registry.root().display()),
        }
    }
}
