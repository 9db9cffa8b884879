//! IO utilities for batch sample files.

pub mod samples_csv;

pub use samples_csv::{read_samples_csv, write_predictions_csv};
