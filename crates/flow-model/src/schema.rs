//! Typed feature schemas bound to loaded regressors.

use std::fmt;
use std::marker::PhantomData;

use crate::error::ModelError;
use crate::regressor::Regressor;

/// A row of model inputs with a fixed, named column order.
pub trait FeatureVector {
    /// Column names, in the order [`FeatureVector::to_row`] emits values.
    const NAMES: &'static [&'static str];

    fn to_row(&self) -> Vec<f32>;
}

/// A regressor whose input schema has been checked against `F`.
pub struct Model<F> {
    name: String,
    inner: Box<dyn Regressor>,
    _features: PhantomData<fn(&F)>,
}

impl<F> fmt::Debug for Model<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("name", &self.name)
            .field("num_features", &self.inner.num_features())
            .finish_non_exhaustive()
    }
}

impl<F: FeatureVector> Model<F> {
    /// Bind `regressor` to the feature schema `F`.
    ///
    /// When the model stores feature names they must equal `F::NAMES`
    /// exactly, in order. Otherwise only the column count is compared.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::SchemaMismatch`] or [`ModelError::FeatureCount`].
    pub fn bind(name: impl Into<String>, regressor: Box<dyn Regressor>) -> Result<Self, ModelError> {
        let name = name.into();
        match regressor.feature_names() {
            Some(stored) => {
                if stored.iter().map(String::as_str).ne(F::NAMES.iter().copied()) {
                    return Err(ModelError::SchemaMismatch {
                        model: name,
                        expected: stored.to_vec(),
                        found: F::NAMES.iter().map(ToString::to_string).collect(),
                    });
                }
            }
            None => {
                if regressor.num_features() != F::NAMES.len() {
                    return Err(ModelError::FeatureCount {
                        expected: regressor.num_features(),
                        found: F::NAMES.len(),
                    });
                }
            }
        }
        tracing::debug!(model = %name, features = F::NAMES.len(), "feature schema verified");
        Ok(Self {
            name,
            inner: regressor,
            _features: PhantomData,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Predict one value per feature row.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if the regressor fails or returns the wrong
    /// number of values.
    pub fn predict(&self, features: &[F]) -> Result<Vec<f64>, ModelError> {
        let rows: Vec<Vec<f32>> = features.iter().map(FeatureVector::to_row).collect();
        let out = self.inner.predict(&rows)?;
        if out.len() != rows.len() {
            return Err(ModelError::OutputLength {
                expected: rows.len(),
                found: out.len(),
            });
        }
        Ok(out.into_iter().map(f64::from).collect())
    }
}
