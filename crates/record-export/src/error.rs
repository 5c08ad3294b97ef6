//! Error types for record export.

use thiserror::Error;

/// Errors that can occur while exporting records.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Columns have different numbers of rows.
    #[error("Column '{column}' has {found} rows, expected {expected}")]
    StructuralMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
