use crate::error::PredictError;
use crate::math::Array2;

/// The capability interface the prediction service depends on.
///
/// Exactly one concrete implementation exists (the loaded gbdt artifact);
/// the rest of the system sees only this contract. Implementations must be
/// safe for concurrent read-only use, since the loaded model is shared by
/// reference across requests.
pub trait SoilClassifier: Send + Sync {
    /// Class label per row: 0 = not contaminated, 1 = contaminated.
    fn predict(&self, x: &Array2<f32>) -> Result<Vec<u8>, PredictError>;

    /// Per-row probability vector `[p_clean, p_contaminated]`, summing to 1.
    fn predict_proba(&self, x: &Array2<f32>) -> Result<Vec<[f32; 2]>, PredictError>;

    /// Feature-row width this classifier was trained on.
    fn n_features(&self) -> usize;

    /// Human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
