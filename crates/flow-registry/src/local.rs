//! Directory-backed model registry.

use std::path::{Path, PathBuf};

use flow_core::ModelRef;

use crate::MODEL_FILE;
use crate::error::RegistryError;

/// Models stored on disk as `<root>/<name>/<version>/model.json`.
#[derive(Debug, Clone)]
pub struct LocalRegistry {
    root: PathBuf,
}

impl LocalRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn path_for(&self, model: &ModelRef) -> PathBuf {
        self.root
            .join(&model.name)
            .join(model.version.to_string())
            .join(MODEL_FILE)
    }

    /// Locate the artifact for `model`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ModelNotFound`] if the file does not exist.
    pub fn locate(&self, model: &ModelRef) -> Result<PathBuf, RegistryError> {
        let path = self.path_for(model);
        if path.is_file() {
            tracing::debug!(model = %model, path = %path.display(), "found local model");
            Ok(path)
        } else {
            Err(RegistryError::ModelNotFound(format!(
                "{model} (expected {})",
                path.display()
            )))
        }
    }

    /// List every `(name, version)` pair present under the root, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Io`] if the root cannot be read.
    pub fn list(&self) -> Result<Vec<ModelRef>, RegistryError> {
        let mut found = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            for version in std::fs::read_dir(entry.path())? {
                let version = version?;
                let parsed = version.file_name().to_string_lossy().parse::<u32>();
                if let Ok(v) = parsed {
                    if version.path().join(MODEL_FILE).is_file() {
                        found.push(ModelRef::new(name.clone(), v));
                    }
                }
            }
        }
        found.sort_by(|a, b| a.name.cmp(&b.name).then(a.version.cmp(&b.version)));
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_model_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let registry = LocalRegistry::new(dir.path());
        let err = registry.locate(&ModelRef::new("nope", 1)).unwrap_err();
        assert!(matches!(err, RegistryError::ModelNotFound(_)));
    }

    #[test]
    fn path_layout() {
        let registry = LocalRegistry::new("/models");
        assert_eq!(
            registry.path_for(&ModelRef::new("traffic", 7)),
            PathBuf::from("/models/traffic/7/model.json")
        );
    }
}
