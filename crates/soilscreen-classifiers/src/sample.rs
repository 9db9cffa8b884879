//! A single soil sample reading as entered by a user.
use serde::{Deserialize, Serialize};

use crate::error::PredictError;
use crate::schema::{FEATURE_COUNT, MEASURED_FEATURES};

/// The twelve measured attributes of one soil sample.
///
/// Every field is optional because form fields may be left blank; a reading
/// must be complete before it can be turned into a feature row. Readings are
/// built fresh per prediction request and have no identity beyond it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleReading {
    pub sand: Option<f32>,
    pub clay: Option<f32>,
    pub silt: Option<f32>,
    pub ph: Option<f32>,
    pub ec: Option<f32>,
    pub organic_matter: Option<f32>,
    pub caco3: Option<f32>,
    pub nitrate: Option<f32>,
    pub phosphorus: Option<f32>,
    pub potassium: Option<f32>,
    pub magnesium: Option<f32>,
    pub iron: Option<f32>,
}

impl SampleReading {
    /// Build a complete reading from twelve values in schema order.
    pub fn from_measured(values: [f32; MEASURED_FEATURES]) -> Self {
        SampleReading {
            sand: Some(values[0]),
            clay: Some(values[1]),
            silt: Some(values[2]),
            ph: Some(values[3]),
            ec: Some(values[4]),
            organic_matter: Some(values[5]),
            caco3: Some(values[6]),
            nitrate: Some(values[7]),
            phosphorus: Some(values[8]),
            potassium: Some(values[9]),
            magnesium: Some(values[10]),
            iron: Some(values[11]),
        }
    }

    /// The measured fields paired with their schema names, in schema order.
    pub fn fields(&self) -> [(&'static str, Option<f32>); MEASURED_FEATURES] {
        [
            ("Sand %", self.sand),
            ("Clay %", self.clay),
            ("Silt %", self.silt),
            ("pH", self.ph),
            ("EC mS/cm", self.ec),
            ("O.M. %", self.organic_matter),
            ("CACO3 %", self.caco3),
            ("N_NO3 ppm", self.nitrate),
            ("P ppm", self.phosphorus),
            ("K ppm", self.potassium),
            ("Mg ppm", self.magnesium),
            ("Fe ppm", self.iron),
        ]
    }

    /// Schema names of every field currently missing, in schema order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.fields()
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_some())
    }

    /// Assemble the sixteen-wide feature row the classifier expects: the
    /// twelve measured values in schema order followed by four zeros for the
    /// uncollected trailing features (see the schema module).
    ///
    /// Fails rather than forwarding nulls: the backend's behavior on missing
    /// values is undefined.
    pub fn feature_row(&self) -> Result<Vec<f32>, PredictError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(PredictError::IncompleteReading { missing });
        }
        let mut row = Vec::with_capacity(FEATURE_COUNT);
        for (_, value) in self.fields() {
            row.push(value.unwrap_or(0.0));
        }
        row.resize(FEATURE_COUNT, 0.0);
        Ok(row)
    }
}
