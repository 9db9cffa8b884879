//! Single-reading prediction runner.
use anyhow::Result;
use log::info;

use soilscreen_classifiers::predictor::{Prediction, PredictionService};
use soilscreen_classifiers::sample::SampleReading;

/// Score one reading. Invoking the subcommand is the explicit trigger
/// signal, so the guard is always satisfied here.
pub fn run_single(service: &PredictionService, reading: &SampleReading) -> Result<Prediction> {
    let prediction = service.predict(reading, true)?;
    info!(
        "scored one reading with {} -> {}",
        service.classifier_name(),
        prediction.label
    );
    Ok(prediction)
}
