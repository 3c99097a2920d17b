//! CSV file reading.
//!
//! Fixed-schema files (the mapping table) are read row by row with the `csv`
//! crate; tool exports with a dynamic column set are read into a Polars
//! DataFrame with full-file schema inference.

use std::collections::BTreeMap;
use std::path::Path;

use ::csv::ReaderBuilder;
use polars::prelude::*;

use crate::error::{IngestError, Result};

/// Header row plus data rows keyed by header.
#[derive(Debug, Clone, Default)]
pub struct CsvRows {
    pub headers: Vec<String>,
    pub rows: Vec<BTreeMap<String, String>>,
}

impl CsvRows {
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|header| header == name)
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a CSV file with a header row into header-keyed rows.
///
/// Cells are trimmed; rows that are entirely blank are skipped.
pub fn read_csv_rows(path: &Path) -> Result<CsvRows> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| match e.into_kind() {
            ::csv::ErrorKind::Io(source) => IngestError::file_open(path, source),
            other => IngestError::CsvParse {
                path: path.to_path_buf(),
                message: format!("{other:?}"),
            },
        })?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = BTreeMap::new();
        for (idx, header) in headers.iter().enumerate() {
            let value = record.get(idx).unwrap_or("").trim().to_string();
            row.insert(header.clone(), value);
        }
        rows.push(row);
    }
    tracing::debug!(path = %path.display(), rows = rows.len(), "read csv rows");
    Ok(CsvRows { headers, rows })
}

/// Reads a CSV export into a DataFrame.
///
/// The schema is inferred from every row so that a column holding text far
/// down the file is typed as text instead of failing the load.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    std::fs::metadata(path).map_err(|e| IngestError::file_open(path, e))?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.width() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read csv frame"
    );
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_rows_keyed_by_header() {
        let file = create_temp_csv("\u{feff}A, B ,C\n1, x ,\n,,\n2,y,z\n");
        let table = read_csv_rows(file.path()).unwrap();

        assert_eq!(table.headers, vec!["A", "B", "C"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0]["B"], "x");
        assert_eq!(table.rows[0]["C"], "");
        assert!(table.has_column("C"));
    }

    #[test]
    fn test_read_csv_rows_short_record() {
        let file = create_temp_csv("A,B\n1\n");
        let table = read_csv_rows(file.path()).unwrap();
        assert_eq!(table.rows[0]["B"], "");
    }

    #[test]
    fn test_read_csv_rows_missing_file() {
        let result = read_csv_rows(Path::new("/nonexistent/mapping.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_read_csv_frame() {
        let file = create_temp_csv("Page URL,Broken links\nhttps://a.test/,1\nhttps://b.test/,0\n");
        let df = read_csv_frame(file.path()).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 2);
    }

    #[test]
    fn test_read_csv_frame_missing_file() {
        let result = read_csv_frame(Path::new("/nonexistent/audit.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
