//! soilscreen-classifiers: soil contamination prediction from sample readings.
//!
//! This crate wraps a pre-trained gradient-boosted classifier artifact behind
//! a small capability trait and exposes a stateless prediction service that
//! turns a twelve-field soil sample reading into a contamination verdict and
//! probability. CSV batch IO and JSON configuration helpers round out what a
//! serving process needs.
//!
//! The classifier artifact is loaded once at startup, validated against the
//! feature schema, and shared read-only for the life of the process.
pub mod config;
pub mod error;
pub mod io;
pub mod math;
pub mod models;
pub mod predictor;
pub mod sample;
pub mod schema;
