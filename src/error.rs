//! Error types for the fallible edges around the engine (file loading, range checks)
//!
//! The projection math itself is infallible; only I/O and input validation
//! report errors.

use thiserror::Error;

/// Errors raised while loading scenarios or validating inputs
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{field} = {value} is outside the supported range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("scenario file contains no rows")]
    EmptyScenarioFile,
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
