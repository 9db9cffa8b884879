use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Serving configuration for the prediction process.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Path to the serialized classifier artifact (manifest sits alongside).
    pub artifact_path: PathBuf,
    /// Probability above which a sample is labeled contaminated.
    pub threshold: f32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            artifact_path: PathBuf::from("soil_contamination_model.gbdt"),
            threshold: 0.5,
        }
    }
}

/// Load a serving configuration from a JSON file.
pub fn load_service_config<P: AsRef<Path>>(path: P) -> Result<ServiceConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: ServiceConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
