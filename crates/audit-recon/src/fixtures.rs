//! Shared builders for unit tests.

use audit_ingest::{PAGE_URL_COLUMN, SourceAudit};
use audit_model::{ExpandedMappingRow, MappingEntry, NOT_AVAILABLE, UNCATEGORIZED};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

/// Source audit over pages `u1..u4` with one integer column per issue.
pub fn source_audit(issues: &[(&str, [i64; 4])]) -> SourceAudit {
    let mut columns: Vec<Column> =
        vec![Series::new(PAGE_URL_COLUMN.into(), vec!["u1", "u2", "u3", "u4"]).into_column()];
    for (name, values) in issues {
        columns.push(Series::new((*name).into(), values.to_vec()).into_column());
    }
    SourceAudit::from_frame(DataFrame::new(columns).unwrap()).unwrap()
}

pub fn entry(name: &str, issue_type: &str, categories: &str) -> MappingEntry {
    MappingEntry {
        source_issue_name: name.to_string(),
        source_issue_type: issue_type.to_string(),
        source_issue_categories: categories.to_string(),
        source_description: format!("{name} description"),
        source_fix_text: format!("Fix {name}"),
        target_issue_name: NOT_AVAILABLE.to_string(),
        target_issue_type: UNCATEGORIZED.to_string(),
        target_priority: String::new(),
        target_description: String::new(),
        target_fix_text: String::new(),
        crawl_config_ref: None,
        crawl_export_tabs: None,
    }
}

pub fn row(name: &str, issue_type: &str, category: &str) -> ExpandedMappingRow {
    ExpandedMappingRow::new(&entry(name, issue_type, category), category)
}
