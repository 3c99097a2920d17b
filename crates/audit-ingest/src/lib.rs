//! Audit data ingestion.
//!
//! Loads the static mapping table and the two uploaded audit exports,
//! normalizing placeholder values so that downstream reconciliation never
//! sees a null category, type or priority.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use audit_ingest::{load_mapping_table, load_source_audit, load_target_audit};
//!
//! let mapping = load_mapping_table(Path::new("data/mapping/mapping.csv"))?;
//! let source = load_source_audit(Path::new("uploads/site_audit.csv"))?;
//! let target = load_target_audit(Path::new("uploads/issues_overview.csv"))?;
//! ```

mod reader;
mod error;
mod mapping;
mod polars_utils;
mod source;
mod target;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{CsvRows, read_csv_frame, read_csv_rows};

// === Loaders ===
pub use mapping::{MappingColumns, load_mapping_table, mapping_from_rows};
pub use source::{PAGE_URL_COLUMN, SourceAudit, load_source_audit};
pub use target::{TargetAudit, TargetColumns, load_target_audit, parse_percent};

// === Value Coercion ===
pub use polars_utils::{any_to_f64, any_to_string, format_numeric, parse_f64};
