//! Error types for audit ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the mapping table or an audit export.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Schema Errors ===
    /// Required column not found.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Value that cannot be converted to the expected type.
    #[error("invalid {field} value '{value}' in row {row}")]
    InvalidValue {
        field: String,
        value: String,
        row: usize,
    },

    // === DataFrame Errors ===
    /// Column not found in DataFrame.
    #[error("column '{column}' not found in DataFrame")]
    ColumnNotFound { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl IngestError {
    /// Operator-facing message with a recovery hint.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::FileNotFound { .. } => "The file could not be found. Please check the path.",
            Self::MissingColumn { .. }
            | Self::ColumnNotFound { .. }
            | Self::InvalidValue { .. } => {
                "The export does not have the expected layout. Please re-upload a fresh export."
            }
            Self::FileRead { .. }
            | Self::CsvParse { .. }
            | Self::EmptyCsv { .. }
            | Self::DataFrame { .. } => "The file could not be read. Please re-upload it.",
        }
    }

    pub(crate) fn file_open(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::InvalidValue {
            field: "% of Total".to_string(),
            value: "abc".to_string(),
            row: 3,
        };
        assert_eq!(err.to_string(), "invalid % of Total value 'abc' in row 3");
        assert!(err.user_message().contains("re-upload"));
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }

    #[test]
    fn test_not_found_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = IngestError::file_open(std::path::Path::new("x.csv"), io);
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
