//! Source-tool audit export: one row per crawled page, one flag column per issue.

use std::path::Path;

use audit_model::UNCATEGORIZED;
use polars::prelude::*;

use crate::error::{IngestError, Result};
use crate::polars_utils::{any_to_f64, any_to_string};
use crate::reader::read_csv_frame;

/// Identity column of the source-tool export.
pub const PAGE_URL_COLUMN: &str = "Page URL";

/// Loaded source-tool audit.
///
/// Issue columns are not checked against the mapping table here; a mapping
/// row without a matching column simply attributes no URLs.
#[derive(Debug, Clone)]
pub struct SourceAudit {
    frame: DataFrame,
}

/// Loads the source-tool export from `path`.
pub fn load_source_audit(path: &Path) -> Result<SourceAudit> {
    let frame = read_csv_frame(path)?;
    let audit = SourceAudit::from_frame(frame).map_err(|err| match err {
        IngestError::ColumnNotFound { column } => IngestError::MissingColumn {
            column,
            path: path.to_path_buf(),
        },
        other => other,
    })?;
    tracing::info!(
        path = %path.display(),
        pages = audit.height(),
        issue_columns = audit.issue_columns().count(),
        "loaded source audit"
    );
    Ok(audit)
}

impl SourceAudit {
    /// Wraps a DataFrame, replacing nulls in every text column with "Uncategorized".
    pub fn from_frame(mut frame: DataFrame) -> Result<Self> {
        if frame.column(PAGE_URL_COLUMN).is_err() {
            return Err(IngestError::ColumnNotFound {
                column: PAGE_URL_COLUMN.to_string(),
            });
        }
        let filled = fill_text_nulls(&mut frame)?;
        if filled > 0 {
            tracing::debug!(columns = filled, "filled missing text values");
        }
        Ok(Self { frame })
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Number of page rows.
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// All column names in file order, including the page URL column.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.frame.get_columns().iter().map(|column| column.name().as_str())
    }

    /// Column names other than the page URL column.
    pub fn issue_columns(&self) -> impl Iterator<Item = &str> {
        self.column_names().filter(|name| *name != PAGE_URL_COLUMN)
    }

    pub fn page_url(&self, row: usize) -> String {
        match self.frame.column(PAGE_URL_COLUMN) {
            Ok(column) => any_to_string(column.get(row).unwrap_or(AnyValue::Null)),
            Err(_) => String::new(),
        }
    }

    /// Numeric view of a cell; missing values and non-numeric text are `None`.
    pub fn numeric_value(&self, column: &str, row: usize) -> Option<f64> {
        let column = self.frame.column(column).ok()?;
        any_to_f64(column.get(row).unwrap_or(AnyValue::Null))
    }

    /// Row indices, in input order, whose value in `column` is strictly positive.
    ///
    /// Returns an empty list when the column does not exist.
    pub fn flagged_rows(&self, column: &str) -> Vec<usize> {
        if self.frame.column(column).is_err() {
            return Vec::new();
        }
        (0..self.frame.height())
            .filter(|&row| self.numeric_value(column, row).is_some_and(|v| v > 0.0))
            .collect()
    }
}

/// Replaces nulls in String-typed columns with the "Uncategorized" sentinel.
/// Returns the number of columns rewritten.
fn fill_text_nulls(frame: &mut DataFrame) -> Result<usize> {
    let text_columns: Vec<PlSmallStr> = frame
        .get_columns()
        .iter()
        .filter(|column| column.dtype() == &DataType::String && column.null_count() > 0)
        .map(|column| column.name().clone())
        .collect();
    for name in &text_columns {
        let filled: Vec<String> = frame
            .column(name.as_str())?
            .as_materialized_series()
            .str()?
            .into_iter()
            .map(|value| value.unwrap_or(UNCATEGORIZED).to_string())
            .collect();
        frame.with_column(Series::new(name.clone(), filled))?;
    }
    Ok(text_columns.len())
}
