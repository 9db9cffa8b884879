use std::error::Error;
use std::fmt;

/// Errors raised on the per-request prediction path.
///
/// Artifact loading failures are startup-fatal and surfaced as `anyhow`
/// context chains instead; nothing here is retried.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictError {
    /// One or more of the twelve measured fields was missing. The classifier
    /// never sees incomplete rows; the missing field names are reported so
    /// the caller can render a clear "incomplete input" message.
    IncompleteReading { missing: Vec<&'static str> },
    /// A feature matrix of the wrong width reached the classifier boundary.
    ShapeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PredictError::IncompleteReading { missing } => {
                write!(f, "Incomplete soil reading: missing {}", missing.join(", "))
            }
            PredictError::ShapeMismatch { expected, actual } => write!(
                f,
                "Feature row has {} values but the classifier expects {}",
                actual, expected
            ),
        }
    }
}

impl Error for PredictError {}
