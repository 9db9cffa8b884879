//! The feature schema the classifier artifact was trained on.
//!
//! Feature order and count are a hard contract with the trained model:
//! reordering or omitting a column silently corrupts predictions with no
//! error from the backend. Everything that builds or checks a feature row
//! goes through the constants here, and artifact loading asserts the
//! recorded width against [`FEATURE_COUNT`].

/// Version of the feature schema. Bumped whenever the trained feature set
/// changes; the artifact manifest records the version it was trained with.
pub const SCHEMA_VERSION: u32 = 1;

/// Total width of the feature row the classifier expects.
pub const FEATURE_COUNT: usize = 16;

/// Number of leading features supplied by the user per reading.
pub const MEASURED_FEATURES: usize = 12;

/// Number of trailing features always set to zero.
pub const PADDED_FEATURES: usize = 4;

/// Feature names in training order.
///
/// The last four (Zn, Mn, Cu, B) are never collected from users and are
/// always zero in serving. ASSUMPTION (unconfirmed with the artifact owner):
/// the model may have been trained expecting real measurements there, in
/// which case zero-padding is a latent bug rather than an intentional
/// simplification. Do not change the padding without that confirmation.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Sand %",
    "Clay %",
    "Silt %",
    "pH",
    "EC mS/cm",
    "O.M. %",
    "CACO3 %",
    "N_NO3 ppm",
    "P ppm",
    "K ppm",
    "Mg ppm",
    "Fe ppm",
    "Zn ppm",
    "Mn ppm",
    "Cu ppm",
    "B ppm",
];

/// Names of the twelve user-measured features, in schema order.
pub fn measured_names() -> &'static [&'static str] {
    &FEATURE_NAMES[..MEASURED_FEATURES]
}

/// Names of the four always-zero padded features, in schema order.
pub fn padded_names() -> &'static [&'static str] {
    &FEATURE_NAMES[MEASURED_FEATURES..]
}
