//! Issue-by-URL-count aggregation behind the statistics chart.

use std::collections::{BTreeSet, HashSet};

use audit_ingest::SourceAudit;
use audit_model::{ChartColor, IssueFilter, MappingEntry, MappingTable};
use serde::Serialize;

use crate::attribution::{equivalent_columns, normalize_issue_key};

/// One bar of the statistics chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueUrlCount {
    pub issue: String,
    pub issue_type: String,
    pub color: ChartColor,
    /// Distinct page URLs flagged under any column equivalent to the issue.
    pub url_count: usize,
}

/// Counts distinct affected URLs per issue, for the mapping rows that pass
/// `filter`, sorted by count descending.
///
/// Mapping rows whose names differ only by whitespace or case are merged
/// and keep the first row's name and type. Every audit column equivalent to
/// the merged name contributes, and a URL flagged by more than one of them
/// is counted once. Returns `None` when no issue has an affected URL.
pub fn issue_url_counts(
    table: &MappingTable,
    audit: &SourceAudit,
    filter: &IssueFilter,
) -> Option<Vec<IssueUrlCount>> {
    let mut order: Vec<(String, &MappingEntry)> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for entry in table {
        if !entry.has_source()
            || !filter.accepts_type(&entry.source_issue_type)
            || !filter.accepts_any_category(entry.categories())
        {
            continue;
        }
        let key = normalize_issue_key(&entry.source_issue_name);
        if seen.insert(key.clone()) {
            order.push((key, entry));
        }
    }

    let mut counts: Vec<IssueUrlCount> = order
        .into_iter()
        .filter_map(|(key, entry)| {
            let mut urls = BTreeSet::new();
            for column in equivalent_columns(audit, &key) {
                urls.extend(
                    audit
                        .flagged_rows(column)
                        .into_iter()
                        .map(|row| audit.page_url(row)),
                );
            }
            if urls.is_empty() {
                return None;
            }
            Some(IssueUrlCount {
                issue: entry.source_issue_name.clone(),
                issue_type: entry.source_issue_type.clone(),
                color: entry.severity().color(),
                url_count: urls.len(),
            })
        })
        .collect();

    if counts.is_empty() {
        tracing::debug!("no issues with affected urls for the current filters");
        return None;
    }
    counts.sort_by(|a, b| b.url_count.cmp(&a.url_count));
    Some(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{entry, source_audit};

    #[test]
    fn equivalent_columns_count_each_url_once() {
        let table = MappingTable::new(vec![
            entry("Broken Links", "Error", "Links"),
            entry("broken links", "Error", "Links"),
        ]);
        let audit = source_audit(&[
            ("Broken Links", [1, 1, 0, 0]),
            ("BROKEN LINKS", [0, 1, 1, 0]),
        ]);
        let counts = issue_url_counts(&table, &audit, &IssueFilter::new()).unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].issue, "Broken Links");
        assert_eq!(counts[0].url_count, 3);
        assert_eq!(counts[0].color, ChartColor::Red);
    }

    #[test]
    fn category_filter_matches_any_subcategory() {
        let table = MappingTable::new(vec![entry("Broken Links", "Error", "Links, Crawlability")]);
        let audit = source_audit(&[("Broken Links", [1, 0, 0, 0])]);
        let filter = IssueFilter::new().with_categories(["Crawlability"]);
        assert!(issue_url_counts(&table, &audit, &filter).is_some());

        let filter = IssueFilter::new().with_categories(["Images"]);
        assert!(issue_url_counts(&table, &audit, &filter).is_none());
    }

    #[test]
    fn type_filter_is_exact() {
        let table = MappingTable::new(vec![
            entry("Broken Links", "Error", "Links"),
            entry("Slow Page", "Warning", "Performance"),
        ]);
        let audit = source_audit(&[("Broken Links", [1, 0, 0, 0]), ("Slow Page", [1, 1, 0, 0])]);
        let filter = IssueFilter::new().with_types(["Warning"]);
        let counts = issue_url_counts(&table, &audit, &filter).unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].issue, "Slow Page");
        assert_eq!(counts[0].color, ChartColor::Yellow);
    }

    #[test]
    fn zero_counts_and_unmatched_names_are_excluded() {
        let table = MappingTable::new(vec![
            entry("Broken Links", "Error", "Links"),
            entry("Missing Title", "Notice", "Content"),
            entry("NA", "Notice", "Content"),
        ]);
        let audit = source_audit(&[("Broken Links", [0, 0, 0, 0]), ("NA", [1, 1, 1, 1])]);
        assert_eq!(issue_url_counts(&table, &audit, &IssueFilter::new()), None);
    }

    #[test]
    fn sorted_by_count_descending() {
        let table = MappingTable::new(vec![
            entry("Missing Alt", "Notice", "Images"),
            entry("Broken Links", "Error", "Links"),
        ]);
        let audit = source_audit(&[("Missing Alt", [1, 0, 0, 0]), ("Broken Links", [1, 1, 1, 0])]);
        let counts = issue_url_counts(&table, &audit, &IssueFilter::new()).unwrap();
        let issues: Vec<&str> = counts.iter().map(|c| c.issue.as_str()).collect();
        assert_eq!(issues, vec!["Broken Links", "Missing Alt"]);
    }
}
