//! Error types for spreadsheet export.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// Workbook could not be built or saved.
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Table exceeds the worksheet grid.
    #[error("table too large for a worksheet: {rows} rows, {columns} columns")]
    TooLarge { rows: usize, columns: usize },
}

impl ExportError {
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Xlsx(_) => "The spreadsheet could not be written. Check the output path.",
            Self::TooLarge { .. } => "This view is too large to export as a single sheet.",
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
