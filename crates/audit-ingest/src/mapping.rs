//! Mapping table loader.

use std::collections::BTreeMap;
use std::path::Path;

use audit_model::{MappingEntry, MappingTable, or_not_available, or_uncategorized};

use crate::error::{IngestError, Result};
use crate::reader::{CsvRows, read_csv_rows};

/// Header names of the mapping table file.
pub struct MappingColumns;

impl MappingColumns {
    pub const SOURCE_NAME: &'static str = "Issue Name Contains - SemRush";
    pub const SOURCE_TYPE: &'static str = "Issue Type - SemRush";
    pub const SOURCE_CATEGORY: &'static str = "Issue category - SemRush";
    pub const SOURCE_DESCRIPTION: &'static str = "Issue description - SemRush";
    pub const SOURCE_FIX: &'static str = "How to fix - SemRush";
    pub const TARGET_NAME: &'static str = "Issue Name - ScreamingFrog";
    pub const TARGET_TYPE: &'static str = "Issue Type - ScreamingFrog";
    pub const TARGET_PRIORITY: &'static str = "Issue Priority - ScreamingFrog";
    pub const TARGET_DESCRIPTION: &'static str = "Description ScreamingFrog";
    pub const TARGET_FIX: &'static str = "How To Fix - ScreamingFrog";
    pub const CRAWL_CONFIG: &'static str = "sf_config_file";
    pub const CRAWL_EXPORT_TABS: &'static str = "sf_export_tabs";

    pub const REQUIRED: [&'static str; 10] = [
        Self::SOURCE_NAME,
        Self::SOURCE_TYPE,
        Self::SOURCE_CATEGORY,
        Self::SOURCE_DESCRIPTION,
        Self::SOURCE_FIX,
        Self::TARGET_NAME,
        Self::TARGET_TYPE,
        Self::TARGET_PRIORITY,
        Self::TARGET_DESCRIPTION,
        Self::TARGET_FIX,
    ];
}

/// Loads the mapping table from `path`.
///
/// Missing categories and issue types become "Uncategorized"; missing issue
/// names become "NA". Any read or schema failure yields no table.
pub fn load_mapping_table(path: &Path) -> Result<MappingTable> {
    let rows = read_csv_rows(path)?;
    let table = mapping_from_rows(&rows, path)?;
    tracing::info!(
        path = %path.display(),
        entries = table.len(),
        matched = table.iter().filter(|entry| entry.is_matched()).count(),
        "loaded mapping table"
    );
    Ok(table)
}

/// Builds a mapping table from already-read CSV rows.
pub fn mapping_from_rows(rows: &CsvRows, path: &Path) -> Result<MappingTable> {
    for column in MappingColumns::REQUIRED {
        if !rows.has_column(column) {
            return Err(IngestError::MissingColumn {
                column: column.to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    let entries = rows.rows.iter().map(entry_from_row).collect();
    Ok(MappingTable::new(entries))
}

fn entry_from_row(row: &BTreeMap<String, String>) -> MappingEntry {
    let text = |column: &str| row.get(column).cloned().unwrap_or_default();
    let optional = |column: &str| {
        row.get(column)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    };

    MappingEntry {
        source_issue_name: or_not_available(&text(MappingColumns::SOURCE_NAME)),
        source_issue_type: or_uncategorized(&text(MappingColumns::SOURCE_TYPE)),
        source_issue_categories: or_uncategorized(&text(MappingColumns::SOURCE_CATEGORY)),
        source_description: text(MappingColumns::SOURCE_DESCRIPTION),
        source_fix_text: text(MappingColumns::SOURCE_FIX),
        target_issue_name: or_not_available(&text(MappingColumns::TARGET_NAME)),
        target_issue_type: or_uncategorized(&text(MappingColumns::TARGET_TYPE)),
        target_priority: text(MappingColumns::TARGET_PRIORITY),
        target_description: text(MappingColumns::TARGET_DESCRIPTION),
        target_fix_text: text(MappingColumns::TARGET_FIX),
        crawl_config_ref: optional(MappingColumns::CRAWL_CONFIG),
        crawl_export_tabs: optional(MappingColumns::CRAWL_EXPORT_TABS),
    }
}
