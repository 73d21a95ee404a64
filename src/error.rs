//! Error types for the evaluation and leaderboard tools

use thiserror::Error;

/// Custom error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// NIfTI decoding error
    #[error("failed to decode NIfTI volume: {0}")]
    Nifti(#[from] nifti::NiftiError),

    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Volume shapes disagree
    #[error("{name} volume has shape {found:?}, expected {expected:?}")]
    ShapeMismatch {
        name: &'static str,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    /// Plot rendering error
    #[error("plot rendering failed: {0}")]
    Plot(String),
}

/// Result type alias using our custom Error
pub type Result<T> = std::result::Result<T, Error>;
