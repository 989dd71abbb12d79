//! Error types for the cleaning pipeline.

use thiserror::Error;

/// Fatal pipeline errors. Malformed cell values are never errors; they become null.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A column required by a step is absent from the table.
    #[error("required column '{column}' not found in table")]
    MissingColumn { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_display() {
        let err = TransformError::MissingColumn {
            column: "blood_pressure".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "required column 'blood_pressure' not found in table"
        );
    }
}
