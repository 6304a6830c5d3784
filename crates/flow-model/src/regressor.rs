use crate::error::ModelError;
use crate::xgboost::XgbModel;

/// A loaded regression model, independent of its on-disk format.
pub trait Regressor: Send + Sync {
    /// Feature names stored in the model, if it recorded any.
    fn feature_names(&self) -> Option<&[String]>;

    /// Number of input columns the model expects.
    fn num_features(&self) -> usize;

    /// Predict one value per input row.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::FeatureCount`] when a row has the wrong width.
    fn predict(&self, rows: &[Vec<f32>]) -> Result<Vec<f32>, ModelError>;
}

impl Regressor for XgbModel {
    fn feature_names(&self) -> Option<&[String]> {
        let names = self.names();
        (!names.is_empty()).then_some(names)
    }

    fn num_features(&self) -> usize {
        self.width()
    }

    fn predict(&self, rows: &[Vec<f32>]) -> Result<Vec<f32>, ModelError> {
        rows.iter()
            .map(|row| {
                if row.len() == self.width() {
                    Ok(self.predict_row(row))
                } else {
                    Err(ModelError::FeatureCount {
                        expected: self.width(),
                        found: row.len(),
                    })
                }
            })
            .collect()
    }
}
