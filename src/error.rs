//! Error types for paintshop
//!
//! Library code returns `PaintshopError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for paintshop operations
pub type PaintshopResult<T> = Result<T, PaintshopError>;

/// Main error type for paintshop operations
#[derive(Error, Debug)]
pub enum PaintshopError {
    /// Required form field left empty
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    /// Field present but outside its allowed range
    #[error("invalid value for '{field}': {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    /// Date argument could not be parsed as YYYY-MM-DD
    #[error("invalid date '{value}' - expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// Photo file could not be read
    #[error("cannot read photo {path}: {source}")]
    PhotoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
