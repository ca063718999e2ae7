use thiserror::Error;

/// Convenience result type for reconciliation operations.
pub type ReconcileResult<T> = Result<T, ReconcileError>;

/// Error type returned across the crate.
///
/// This is a single error enum shared by ingestion, normalization and the
/// reconciliation run itself.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV ingestion error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON ingestion error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input does not have the expected tabular shape (missing required
    /// columns, wrong JSON shape, etc.).
    #[error("malformed input: {message}")]
    MalformedInput { message: String },

    /// A raw code had no entry in its lookup table.
    #[error("no mapping for {column} code '{code}' at row {row}")]
    MissingMapping {
        column: String,
        code: String,
        row: usize,
    },
}
