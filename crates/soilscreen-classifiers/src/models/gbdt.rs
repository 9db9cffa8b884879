use std::fmt;

use gbdt::decision_tree::{Data, DataVec};
use gbdt::gradient_boost::GBDT;

use crate::error::PredictError;
use crate::math::Array2;
use crate::models::classifier_trait::SoilClassifier;

/// A loaded gradient-boosted contamination classifier.
///
/// Wraps a gbdt-rs model trained with the LogLikelyhood loss, whose raw
/// prediction is already the probability of the contaminated class. The
/// wrapper is immutable after construction, so sharing it across threads for
/// read-only inference is sound.
pub struct GbdtArtifact {
    model: GBDT,
    n_features: usize,
    threshold: f32,
    name: String,
}

impl GbdtArtifact {
    pub fn new(model: GBDT, n_features: usize, threshold: f32, name: String) -> Self {
        GbdtArtifact {
            model,
            n_features,
            threshold,
            name,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    fn check_width(&self, x: &Array2<f32>) -> Result<(), PredictError> {
        if x.ncols() != self.n_features {
            return Err(PredictError::ShapeMismatch {
                expected: self.n_features,
                actual: x.ncols(),
            });
        }
        Ok(())
    }

    /// Probability of the contaminated class for each row.
    fn contamination_proba(&self, x: &Array2<f32>) -> Result<Vec<f32>, PredictError> {
        self.check_width(x)?;
        let mut rows = DataVec::new();
        for row in 0..x.nrows() {
            let values = x.row_slice(row).to_vec();
            rows.push(Data::new_training_data(values, 1.0, 0.0, None));
        }
        let raw = self.model.predict(&rows);
        Ok(raw.into_iter().map(|p| p.clamp(0.0, 1.0)).collect())
    }
}

// The underlying GBDT has no Debug impl, so report the metadata only.
impl fmt::Debug for GbdtArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GbdtArtifact")
            .field("n_features", &self.n_features)
            .field("threshold", &self.threshold)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl SoilClassifier for GbdtArtifact {
    fn predict(&self, x: &Array2<f32>) -> Result<Vec<u8>, PredictError> {
        let probas = self.contamination_proba(x)?;
        Ok(probas
            .into_iter()
            .map(|p| u8::from(p >= self.threshold))
            .collect())
    }

    fn predict_proba(&self, x: &Array2<f32>) -> Result<Vec<[f32; 2]>, PredictError> {
        let probas = self.contamination_proba(x)?;
        Ok(probas.into_iter().map(|p| [1.0 - p, p]).collect())
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn name(&self) -> &str {
        &self.name
    }
}
