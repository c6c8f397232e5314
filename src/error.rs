//! Error types for the netfilt library.

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum NetfiltError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid matrix value '{value}' at row {row}, column {col}")]
    InvalidCell {
        value: String,
        row: usize,
        col: usize,
    },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Missing key '{0}' in configuration")]
    MissingKey(String),

    #[error("Empty data: {0}")]
    EmptyData(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Malformed network: {0}")]
    Network(String),
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, NetfiltError>;
