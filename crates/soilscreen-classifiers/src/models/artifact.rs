//! Loading (and describing) the serialized classifier artifact.
//!
//! The artifact is two files: the gbdt model itself and a JSON manifest
//! recording the schema version and feature width it was trained with. The
//! manifest lets startup assert the width contract instead of discovering a
//! mismatch through silently wrong predictions.
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use gbdt::gradient_boost::GBDT;
use log::info;
use serde::{Deserialize, Serialize};

use crate::models::gbdt::GbdtArtifact;
use crate::schema::{FEATURE_COUNT, SCHEMA_VERSION};

/// Sidecar metadata written next to the model file at training time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactManifest {
    pub schema_version: u32,
    pub n_features: usize,
    #[serde(default)]
    pub trained_at: Option<String>,
}

impl Default for ArtifactManifest {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            n_features: FEATURE_COUNT,
            trained_at: None,
        }
    }
}

/// The manifest path for a given model path (`<model>.manifest.json`).
pub fn manifest_path(model_path: &Path) -> PathBuf {
    let mut name = model_path.as_os_str().to_os_string();
    name.push(".manifest.json");
    PathBuf::from(name)
}

/// Write a manifest next to a model file.
pub fn write_manifest(model_path: &Path, manifest: &ArtifactManifest) -> Result<()> {
    let path = manifest_path(model_path);
    let json = serde_json::to_string_pretty(manifest).context("Failed to serialize manifest")?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write manifest: {}", path.display()))?;
    Ok(())
}

/// Load and validate the classifier artifact.
///
/// Any failure here is fatal at startup: the process must not serve requests
/// with a missing, corrupt, or schema-incompatible model.
pub fn load_artifact(model_path: &Path, threshold: f32) -> Result<GbdtArtifact> {
    let manifest_file = manifest_path(model_path);
    let manifest_json = std::fs::read_to_string(&manifest_file)
        .with_context(|| format!("Failed to read artifact manifest: {}", manifest_file.display()))?;
    let manifest: ArtifactManifest = serde_json::from_str(&manifest_json)
        .with_context(|| format!("Failed to parse artifact manifest: {}", manifest_file.display()))?;

    if manifest.schema_version != SCHEMA_VERSION {
        bail!(
            "Artifact schema version {} does not match serving schema version {}",
            manifest.schema_version,
            SCHEMA_VERSION
        );
    }
    if manifest.n_features != FEATURE_COUNT {
        bail!(
            "Artifact was trained on {} features but the serving schema has {}",
            manifest.n_features,
            FEATURE_COUNT
        );
    }

    let path_str = model_path
        .to_str()
        .ok_or_else(|| anyhow!("Model path is not valid UTF-8: {}", model_path.display()))?;
    let model = GBDT::load_model(path_str)
        .map_err(|e| anyhow!("Failed to load model {}: {}", model_path.display(), e))?;

    info!(
        "Loaded classifier artifact {} (schema v{}, {} features)",
        model_path.display(),
        manifest.schema_version,
        manifest.n_features
    );

    Ok(GbdtArtifact::new(
        model,
        manifest.n_features,
        threshold,
        format!("gbdt:{}", model_path.display()),
    ))
}
