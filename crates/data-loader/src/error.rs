//! Error types for the data-loader crate.
//!
//! Everything that can go wrong at the dataset boundary ends up here:
//! reading the file, decoding JSON, writing exports, and the integrity
//! checks run after loading.

use thiserror::Error;

/// Errors that can occur while loading, validating, or exporting listings
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading or writing
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The dataset (or an import file) is not valid JSON for the listing schema
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Writing the flattened table failed
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// A field had a value outside its vocabulary
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Two listings share the same identifier
    #[error("Duplicate listing id: {id}")]
    DuplicateId { id: String },

    /// salary_min is greater than salary_max
    #[error("Listing {id} has salary_min {min} greater than salary_max {max}")]
    SalaryBounds { id: String, min: u64, max: u64 },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
