//! Filter option lists and filtering of expanded rows for the source tool.

use std::collections::BTreeSet;

use audit_model::{ExpandedMappingRow, IssueFilter, UNCATEGORIZED};

/// Distinct categories of the expanded rows, sorted.
pub fn category_options(expanded: &[ExpandedMappingRow]) -> Vec<String> {
    expanded
        .iter()
        .map(ExpandedMappingRow::category)
        .filter(|category| *category != UNCATEGORIZED)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Distinct source issue types: "Error" types first, then "Warning" types,
/// then the rest. Alphabetical within each band.
pub fn type_options(expanded: &[ExpandedMappingRow]) -> Vec<String> {
    let mut types: Vec<String> = expanded
        .iter()
        .map(|row| row.issue_type().trim())
        .filter(|issue_type| !issue_type.is_empty() && *issue_type != UNCATEGORIZED)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect();
    types.sort_by_key(|issue_type| type_band(issue_type));
    types
}

/// The types selected when the operator has not chosen any.
pub fn default_type_selection(expanded: &[ExpandedMappingRow]) -> Vec<String> {
    type_options(expanded)
        .into_iter()
        .filter(|issue_type| type_band(issue_type) < 2)
        .collect()
}

fn type_band(issue_type: &str) -> u8 {
    if issue_type.contains("Error") {
        0
    } else if issue_type.contains("Warning") {
        1
    } else {
        2
    }
}

/// Rows whose category and type are both selected (exact match).
pub fn filter_expanded<'a>(
    expanded: &'a [ExpandedMappingRow],
    filter: &IssueFilter,
) -> Vec<&'a ExpandedMappingRow> {
    expanded
        .iter()
        .filter(|row| filter.accepts_category(row.category()) && filter.accepts_type(row.issue_type()))
        .collect()
}
