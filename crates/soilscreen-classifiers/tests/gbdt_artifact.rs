//! End-to-end tests against a real gbdt artifact: train a tiny model on
//! synthetic soil samples, save it with a manifest, load it through the
//! artifact loader, and predict through the service.

use std::path::PathBuf;
use std::sync::Arc;

use gbdt::config::Config;
use gbdt::decision_tree::{Data, DataVec};
use gbdt::gradient_boost::GBDT;

use soilscreen_classifiers::error::PredictError;
use soilscreen_classifiers::math::Array2;
use soilscreen_classifiers::models::artifact::{
    load_artifact, manifest_path, write_manifest, ArtifactManifest,
};
use soilscreen_classifiers::models::classifier_trait::SoilClassifier;
use soilscreen_classifiers::predictor::PredictionService;
use soilscreen_classifiers::sample::SampleReading;
use soilscreen_classifiers::schema::FEATURE_COUNT;

/// Synthetic sixteen-wide sample: contaminated rows carry high nitrate and
/// iron, clean rows low. Labels follow the gbdt LogLikelyhood convention
/// (1 contaminated, -1 clean).
fn synthetic_row(i: usize, contaminated: bool) -> Vec<f32> {
    let jitter = (i % 7) as f32 * 0.3;
    let (nitrate, iron) = if contaminated {
        (80.0 + jitter, 12.0 + jitter)
    } else {
        (2.0 + jitter, 1.0 + jitter)
    };
    vec![
        40.0 + jitter, // Sand %
        30.0,          // Clay %
        30.0 - jitter, // Silt %
        6.5,           // pH
        1.2,           // EC mS/cm
        2.0,           // O.M. %
        5.0,           // CACO3 %
        nitrate,       // N_NO3 ppm
        15.0,          // P ppm
        120.0,         // K ppm
        50.0,          // Mg ppm
        iron,          // Fe ppm
        0.0,           // Zn ppm
        0.0,           // Mn ppm
        0.0,           // Cu ppm
        0.0,           // B ppm
    ]
}

fn train_artifact(dir: &tempfile::TempDir) -> PathBuf {
    let mut config = Config::new();
    config.set_feature_size(FEATURE_COUNT);
    config.set_shrinkage(0.1);
    config.set_max_depth(3);
    config.set_iterations(20);
    config.set_loss("LogLikelyhood");

    let mut train = DataVec::new();
    for i in 0..40 {
        let contaminated = i % 2 == 0;
        let label = if contaminated { 1.0 } else { -1.0 };
        train.push(Data::new_training_data(
            synthetic_row(i, contaminated),
            1.0,
            label,
            None,
        ));
    }

    let mut model = GBDT::new(&config);
    model.fit(&mut train);

    let model_path = dir.path().join("soil.gbdt");
    model.save_model(model_path.to_str().unwrap()).unwrap();
    write_manifest(&model_path, &ArtifactManifest::default()).unwrap();
    model_path
}

fn reading(contaminated: bool) -> SampleReading {
    let row = synthetic_row(0, contaminated);
    let mut measured = [0.0; 12];
    measured.copy_from_slice(&row[..12]);
    SampleReading::from_measured(measured)
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn loads_and_reports_schema_width() {
    let dir = tempfile::tempdir().unwrap();
    let path = train_artifact(&dir);
    let artifact = load_artifact(&path, 0.5).unwrap();
    assert_eq!(artifact.n_features(), FEATURE_COUNT);
    assert!(artifact.name().contains("gbdt"));
}

#[test]
fn artifact_debug_output_reports_metadata() {
    // The wrapper is usable in Debug contexts (unwrap_err, assert macros)
    // even though the wrapped model itself is not.
    let dir = tempfile::tempdir().unwrap();
    let path = train_artifact(&dir);
    let artifact = load_artifact(&path, 0.5).unwrap();
    let rendered = format!("{:?}", artifact);
    assert!(rendered.contains("GbdtArtifact"));
    assert!(rendered.contains("n_features: 16"));
    assert!(rendered.contains("threshold: 0.5"));
}

#[test]
fn missing_manifest_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = train_artifact(&dir);
    std::fs::remove_file(manifest_path(&path)).unwrap();
    assert!(load_artifact(&path, 0.5).is_err());
}

#[test]
fn width_mismatch_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = train_artifact(&dir);
    let manifest = ArtifactManifest {
        n_features: 12,
        ..Default::default()
    };
    write_manifest(&path, &manifest).unwrap();
    let err = load_artifact(&path, 0.5).unwrap_err();
    assert!(err.to_string().contains("features"));
}

#[test]
fn schema_version_mismatch_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = train_artifact(&dir);
    let manifest = ArtifactManifest {
        schema_version: 99,
        ..Default::default()
    };
    write_manifest(&path, &manifest).unwrap();
    let err = load_artifact(&path, 0.5).unwrap_err();
    assert!(err.to_string().contains("schema version"));
}

// ---------------------------------------------------------------------------
// Inference through the service
// ---------------------------------------------------------------------------

#[test]
fn separates_contaminated_from_clean_samples() {
    let dir = tempfile::tempdir().unwrap();
    let path = train_artifact(&dir);
    let service = PredictionService::new(Arc::new(load_artifact(&path, 0.5).unwrap()));

    let hot = service.predict(&reading(true), true).unwrap();
    let clean = service.predict(&reading(false), true).unwrap();

    assert!((0.0..=100.0).contains(&hot.percentage));
    assert!((0.0..=100.0).contains(&clean.percentage));
    assert!(
        hot.percentage > clean.percentage,
        "contaminated sample should score higher ({} vs {})",
        hot.percentage,
        clean.percentage
    );
    assert!(hot.message.ends_with(&format!("{:.2}%.", hot.percentage)));
}

#[test]
fn probabilities_sum_to_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = train_artifact(&dir);
    let artifact = load_artifact(&path, 0.5).unwrap();

    let x = Array2::from_shape_vec((1, FEATURE_COUNT), synthetic_row(3, true)).unwrap();
    let probas = artifact.predict_proba(&x).unwrap();
    assert_eq!(probas.len(), 1);
    let [p0, p1] = probas[0];
    assert!((p0 + p1 - 1.0).abs() < 1e-6);
    assert!((0.0..=1.0).contains(&p1));
}

#[test]
fn wrong_width_matrix_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = train_artifact(&dir);
    let artifact = load_artifact(&path, 0.5).unwrap();

    let x = Array2::from_shape_vec((1, 4), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert!(matches!(
        artifact.predict(&x),
        Err(PredictError::ShapeMismatch {
            expected: FEATURE_COUNT,
            actual: 4
        })
    ));
}

#[test]
fn untriggered_never_touches_the_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let path = train_artifact(&dir);
    let service = PredictionService::new(Arc::new(load_artifact(&path, 0.5).unwrap()));

    let p = service.predict(&SampleReading::default(), false).unwrap();
    assert_eq!(p.message, "");
    assert_eq!(p.percentage, 0.0);
    assert_eq!(p.label, "0%");
}
