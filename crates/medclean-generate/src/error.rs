//! Error types for dataset generation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// A sampling distribution rejected its parameters.
    #[error("invalid distribution for {column}: {message}")]
    Distribution {
        column: &'static str,
        message: String,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for GenerateError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for generation.
pub type Result<T> = std::result::Result<T, GenerateError>;
