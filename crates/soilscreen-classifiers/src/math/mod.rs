//! Minimal matrix type used at the classifier boundary.
//!
//! A dependency-free row-major container is all the inference path needs;
//! keeping it local avoids pulling a full ndarray stack into a crate whose
//! largest matrix is one batch of sixteen-wide rows.
pub mod matrix;

pub use matrix::{Array2, ShapeError};
