//! Matched-issue comparison between the two tools.

use audit_model::{MappingEntry, MappingTable};
use serde::Serialize;

/// Summary counts of the tool comparison.
///
/// `found_in_both` always equals `total_matched`: every matched row names a
/// target issue. Both are reported under their own names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonSummary {
    pub total_matched: usize,
    pub source_issues: usize,
    pub found_in_both: usize,
    pub target_issues: usize,
}

/// Mapping rows present in both tools, with the summary counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedComparison<'a> {
    pub rows: Vec<&'a MappingEntry>,
    pub summary: ComparisonSummary,
}

pub fn compare_tools(table: &MappingTable) -> MatchedComparison<'_> {
    let rows: Vec<&MappingEntry> = table.iter().filter(|entry| entry.is_matched()).collect();
    let summary = ComparisonSummary {
        total_matched: rows.len(),
        source_issues: table.iter().filter(|entry| entry.has_source()).count(),
        found_in_both: rows.iter().filter(|entry| entry.has_target()).count(),
        target_issues: table.iter().filter(|entry| entry.has_target()).count(),
    };
    tracing::debug!(
        matched = summary.total_matched,
        source_issues = summary.source_issues,
        target_issues = summary.target_issues,
        "compared tool taxonomies"
    );
    MatchedComparison { rows, summary }
}
