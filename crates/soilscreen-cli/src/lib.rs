//! Library surface of the soilscreen CLI; `main` stays a thin argument
//! parser over these runners.
pub mod run;
