//! The prediction service: sample reading in, contamination verdict out.
//!
//! Stateless request/response glue over the classifier. The only state is
//! the shared read-only classifier handle injected at construction; a
//! repeated identical request yields an identical result.
use std::sync::Arc;

use log::debug;

use crate::error::PredictError;
use crate::math::Array2;
use crate::models::classifier_trait::SoilClassifier;
use crate::sample::SampleReading;
use crate::schema::FEATURE_COUNT;

/// Outputs rendered back to the caller for one reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Sentence for the text block, empty when not triggered.
    pub message: String,
    /// Contamination probability in percent, rounded to two decimals.
    pub percentage: f32,
    /// Percentage formatted for the progress-bar label, e.g. `"78.00%"`.
    pub label: String,
    /// Classifier verdict; false for the inert untriggered result.
    pub contaminated: bool,
}

impl Prediction {
    /// The result returned before the user has asked for a prediction.
    fn inert() -> Self {
        Prediction {
            message: String::new(),
            percentage: 0.0,
            label: "0%".to_string(),
            contaminated: false,
        }
    }
}

/// Prediction service owning a shared handle to the loaded classifier.
///
/// Constructed once at startup with the validated artifact and injected
/// wherever predictions are served; never a global.
pub struct PredictionService {
    classifier: Arc<dyn SoilClassifier>,
}

impl PredictionService {
    pub fn new(classifier: Arc<dyn SoilClassifier>) -> Self {
        PredictionService { classifier }
    }

    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }

    /// Run one prediction.
    ///
    /// `triggered` is the explicit "the user pressed predict" signal; while
    /// it is false (initial load, field edits in progress) the inert result
    /// is returned and the classifier is never invoked, so partial input
    /// can never fire a spurious prediction.
    pub fn predict(
        &self,
        reading: &SampleReading,
        triggered: bool,
    ) -> Result<Prediction, PredictError> {
        if !triggered {
            return Ok(Prediction::inert());
        }
        let row = reading.feature_row()?;
        let actual = row.len();
        let x = Array2::from_shape_vec((1, FEATURE_COUNT), row).map_err(|_| {
            PredictError::ShapeMismatch {
                expected: FEATURE_COUNT,
                actual,
            }
        })?;
        let labels = self.classifier.predict(&x)?;
        let probas = self.classifier.predict_proba(&x)?;
        Ok(compose(labels[0], probas[0][1]))
    }

    /// Predict a batch of complete readings in one classifier call.
    pub fn predict_batch(
        &self,
        readings: &[SampleReading],
    ) -> Result<Vec<Prediction>, PredictError> {
        if readings.is_empty() {
            return Ok(Vec::new());
        }
        let mut flat = Vec::with_capacity(readings.len() * FEATURE_COUNT);
        for reading in readings {
            flat.extend(reading.feature_row()?);
        }
        let actual = flat.len() / readings.len();
        let x = Array2::from_shape_vec((readings.len(), FEATURE_COUNT), flat).map_err(|_| {
            PredictError::ShapeMismatch {
                expected: FEATURE_COUNT,
                actual,
            }
        })?;
        let labels = self.classifier.predict(&x)?;
        let probas = self.classifier.predict_proba(&x)?;
        debug!(
            "batch of {} readings scored by {}",
            readings.len(),
            self.classifier.name()
        );
        Ok(labels
            .into_iter()
            .zip(probas)
            .map(|(label, proba)| compose(label, proba[1]))
            .collect())
    }
}

/// Compose the rendered outputs from a verdict and contamination probability.
fn compose(label: u8, p_contaminated: f32) -> Prediction {
    let percentage = (p_contaminated * 100.0 * 100.0).round() / 100.0;
    let contaminated = label == 1;
    let verdict = if contaminated {
        "Contaminated"
    } else {
        "not Contaminated"
    };
    Prediction {
        message: format!(
            "Prediction: The Soil is {} with a probability of {:.2}%.",
            verdict, percentage
        ),
        percentage,
        label: format!("{:.2}%", percentage),
        contaminated,
    }
}
