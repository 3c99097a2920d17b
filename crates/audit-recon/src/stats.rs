//! Per-category severity statistics.

use std::collections::HashSet;

use audit_ingest::SourceAudit;
use audit_model::{ExpandedMappingRow, SeverityCounts, is_not_available};
use serde::Serialize;

use crate::attribution::affected_urls;

/// Severity counts of one category and whether any of its issues hit a page.
///
/// A category with `has_urls == false` is not rendered at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub counts: SeverityCounts,
    pub has_urls: bool,
}

/// Computes statistics for `rows`, which should all share one category.
///
/// Each issue name contributes its attributed URL count once, to the bucket
/// chosen by its issue type. Names without any attributed URL stay eligible,
/// so a later duplicate is looked up again rather than skipped.
pub fn category_stats<'a, I>(rows: I, audit: &SourceAudit) -> CategoryStats
where
    I: IntoIterator<Item = &'a ExpandedMappingRow>,
{
    let mut stats = CategoryStats::default();
    let mut processed: HashSet<&str> = HashSet::new();
    for row in rows {
        let name = row.issue_name();
        if is_not_available(name) || processed.contains(name) {
            continue;
        }
        let urls = affected_urls(audit, name);
        if urls.is_empty() {
            continue;
        }
        stats.has_urls = true;
        stats.counts.add(row.entry().severity(), urls.len());
        processed.insert(name);
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{row, source_audit};

    #[test]
    fn counts_go_to_severity_buckets() {
        let audit = source_audit(&[
            ("Broken Links", [1, 0, 2, 0]),
            ("Missing Alt", [1, 1, 1, 0]),
            ("Long Title", [0, 0, 0, 5]),
        ]);
        let rows = vec![
            row("Broken Links", "Error", "Links"),
            row("Missing Alt", "Warning", "Links"),
            row("Long Title", "Notice", "Links"),
        ];
        let stats = category_stats(&rows, &audit);
        assert!(stats.has_urls);
        assert_eq!(stats.counts.issues, 2);
        assert_eq!(stats.counts.warnings, 3);
        assert_eq!(stats.counts.notices, 1);
    }

    #[test]
    fn duplicate_name_counted_once() {
        let audit = source_audit(&[("Broken Links", [1, 1, 0, 0])]);
        let rows = vec![
            row("Broken Links", "Error", "Links"),
            row("Broken Links", "Error", "Links"),
        ];
        assert_eq!(category_stats(&rows, &audit).counts.issues, 2);
    }

    #[test]
    fn category_without_urls_is_suppressed() {
        let audit = source_audit(&[("Broken Links", [0, 0, 0, 0])]);
        let rows = vec![
            row("Broken Links", "Error", "Links"),
            row("Missing Title", "Warning", "Links"),
            row("NA", "Notice", "Links"),
        ];
        let stats = category_stats(&rows, &audit);
        assert!(!stats.has_urls);
        assert_eq!(stats.counts.total(), 0);
    }

    #[test]
    fn custom_type_labels_classify_by_substring() {
        let audit = source_audit(&[("Slow Page", [1, 1, 0, 0])]);
        let rows = vec![row("Slow Page", "critical ERROR", "Performance")];
        assert_eq!(category_stats(&rows, &audit).counts.issues, 2);
    }
}
