//! Category expansion: one row per (mapping entry, category).

use audit_model::{ExpandedMappingRow, MappingEntry, MappingTable, UNCATEGORIZED, is_not_available};

/// Splits every entry of `table` into one row per category.
///
/// Entry order is preserved, and within an entry categories keep the
/// left-to-right order in which they were written.
pub fn expand_categories(table: &MappingTable) -> Vec<ExpandedMappingRow> {
    let expanded: Vec<ExpandedMappingRow> = table.iter().flat_map(expand_entry).collect();
    tracing::debug!(
        entries = table.len(),
        rows = expanded.len(),
        "expanded mapping categories"
    );
    expanded
}

/// Expands a single entry.
///
/// Empty labels, "Uncategorized" and "NA" are dropped, so a cell holding
/// only sentinels yields nothing.
pub fn expand_entry(entry: &MappingEntry) -> Vec<ExpandedMappingRow> {
    entry
        .categories()
        .filter(|category| {
            !category.is_empty() && *category != UNCATEGORIZED && !is_not_available(category)
        })
        .map(|category| ExpandedMappingRow::new(entry, category))
        .collect()
}
