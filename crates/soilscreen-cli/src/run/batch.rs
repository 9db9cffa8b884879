//! Batch prediction runner: samples CSV in, predictions CSV out.
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::info;

use soilscreen_classifiers::io::{read_samples_csv, write_predictions_csv};
use soilscreen_classifiers::predictor::PredictionService;

pub fn run_batch(service: &PredictionService, input: &Path, output: &Path) -> Result<usize> {
    let readings = read_samples_csv(input)?;
    if readings.is_empty() {
        bail!("No sample rows found in {}", input.display());
    }

    // Reject incomplete rows up front with their row numbers; the service
    // itself reports only the field names.
    for (idx, reading) in readings.iter().enumerate() {
        let missing = reading.missing_fields();
        if !missing.is_empty() {
            bail!(
                "Row {} is incomplete: missing {}",
                idx + 1,
                missing.join(", ")
            );
        }
    }

    let predictions = service
        .predict_batch(&readings)
        .context("Batch prediction failed")?;
    write_predictions_csv(output, &readings, &predictions)?;

    let contaminated = predictions.iter().filter(|p| p.contaminated).count();
    info!(
        "scored {} readings from {} ({} contaminated), wrote {}",
        readings.len(),
        input.display(),
        contaminated,
        output.display()
    );
    Ok(readings.len())
}
