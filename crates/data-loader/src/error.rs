//! Error types for the data-loader crate.

use thiserror::Error;

/// Errors that can occur while loading the internship catalog.
///
/// Entry-level problems carry the zero-based index of the offending
/// entry so a broken catalog file can be fixed quickly.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// Catalog file does not exist
    #[error("Data file not found: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// File content is not valid JSON
    #[error("Invalid JSON in catalog: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Top-level JSON value is not an array of entries
    #[error("Catalog must contain a list of internship entries")]
    NotAList,

    /// An entry is malformed (wrong shape or wrong field type)
    #[error("Invalid entry at index {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },

    /// An entry has a required field that is blank after trimming
    #[error("Missing required fields in entry at index {index}")]
    MissingFields { index: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
