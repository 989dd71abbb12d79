//! Error types for the quality report.

use thiserror::Error;

use medclean_ingest::IngestError;

/// Errors raised while producing a report. The checks themselves never fail;
/// only loading the table can.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for ReportError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
