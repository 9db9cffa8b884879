//! CSV reader/writer for batches of sample readings.
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::StringRecord;

use crate::predictor::Prediction;
use crate::sample::SampleReading;
use crate::schema::{measured_names, MEASURED_FEATURES};

/// Accepted header spellings for each measured feature, in schema order.
/// Matching is case-insensitive after trimming.
const COLUMN_ALIASES: [&[&str]; MEASURED_FEATURES] = [
    &["Sand %", "sand"],
    &["Clay %", "clay"],
    &["Silt %", "silt"],
    &["pH"],
    &["EC mS/cm", "ec"],
    &["O.M. %", "om", "organic matter %", "organic_matter"],
    &["CACO3 %", "caco3"],
    &["N_NO3 ppm", "n_no3", "nitrate"],
    &["P ppm", "p_ppm", "phosphorus"],
    &["K ppm", "k_ppm", "potassium"],
    &["Mg ppm", "mg_ppm", "magnesium"],
    &["Fe ppm", "fe_ppm", "iron"],
];

/// Read a headered CSV of sample readings.
///
/// All twelve measured columns must be present (any accepted spelling);
/// blank cells become missing values, which the prediction path will reject
/// with the field names spelled out.
pub fn read_samples_csv<P: AsRef<Path>>(path: P) -> Result<Vec<SampleReading>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(&path)
        .with_context(|| format!("Failed to open samples file: {}", path.as_ref().display()))?;

    let headers = reader
        .headers()
        .context("Failed to read samples header row")?
        .clone();

    let indices = resolve_columns(&headers)?;

    let mut readings = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
        let mut values = [None; MEASURED_FEATURES];
        for (field, &col) in indices.iter().enumerate() {
            values[field] = parse_cell(&record, col, field, row_idx)?;
        }
        readings.push(SampleReading {
            sand: values[0],
            clay: values[1],
            silt: values[2],
            ph: values[3],
            ec: values[4],
            organic_matter: values[5],
            caco3: values[6],
            nitrate: values[7],
            phosphorus: values[8],
            potassium: values[9],
            magnesium: values[10],
            iron: values[11],
        });
    }
    Ok(readings)
}

/// Write one output row per reading: the twelve inputs echoed, then the
/// verdict and the contamination probability in percent.
pub fn write_predictions_csv<P: AsRef<Path>>(
    path: P,
    readings: &[SampleReading],
    predictions: &[Prediction],
) -> Result<()> {
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("Failed to create output file: {}", path.as_ref().display()))?;

    let mut header: Vec<&str> = measured_names().to_vec();
    header.push("prediction");
    header.push("probability_pct");
    writer.write_record(&header).context("Failed to write header")?;

    for (reading, prediction) in readings.iter().zip(predictions) {
        let mut record: Vec<String> = reading
            .fields()
            .iter()
            .map(|(_, value)| value.map_or_else(String::new, |v| v.to_string()))
            .collect();
        record.push(
            if prediction.contaminated {
                "Contaminated"
            } else {
                "not Contaminated"
            }
            .to_string(),
        );
        record.push(format!("{:.2}", prediction.percentage));
        writer.write_record(&record).context("Failed to write row")?;
    }
    writer.flush().context("Failed to flush output file")?;
    Ok(())
}

fn resolve_columns(headers: &StringRecord) -> Result<[usize; MEASURED_FEATURES]> {
    let mut indices = [usize::MAX; MEASURED_FEATURES];
    for (field, aliases) in COLUMN_ALIASES.iter().enumerate() {
        let found = headers.iter().position(|header| {
            let header = header.trim();
            aliases.iter().any(|alias| header.eq_ignore_ascii_case(alias))
        });
        match found {
            Some(idx) => indices[field] = idx,
            None => {
                return Err(anyhow!(
                    "Missing column '{}' in samples header",
                    measured_names()[field]
                ))
            }
        }
    }
    Ok(indices)
}

fn parse_cell(
    record: &StringRecord,
    col: usize,
    field: usize,
    row_idx: usize,
) -> Result<Option<f32>> {
    let raw = record
        .get(col)
        .ok_or_else(|| anyhow!("Missing value for '{}' at row {}", measured_names()[field], row_idx + 1))?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let value = raw.parse::<f32>().with_context(|| {
        format!(
            "Invalid value '{}' for '{}' at row {}",
            raw,
            measured_names()[field],
            row_idx + 1
        )
    })?;
    Ok(Some(value))
}
