//! Category rendering pass: the issue groups shown to the operator.

use std::collections::{BTreeMap, HashSet};

use audit_ingest::SourceAudit;
use audit_model::{ExpandedMappingRow, UNCATEGORIZED, is_not_available};
use serde::Serialize;

use crate::attribution::affected_urls;
use crate::stats::{CategoryStats, category_stats};

/// One issue listed under a category, with the URLs attributed to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayedIssue {
    /// Position of this issue across the whole rendering pass, starting at 0.
    pub ordinal: usize,
    pub category: String,
    pub name: String,
    pub issue_type: String,
    pub description: String,
    pub fix_text: String,
    pub urls: Vec<String>,
}

/// A rendered category: its statistics and the issues first shown under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueGroup {
    pub category: String,
    pub stats: CategoryStats,
    pub issues: Vec<DisplayedIssue>,
}

/// Export row of the affected-URL download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AffectedUrlRow {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Issue Type")]
    pub issue_type: String,
    #[serde(rename = "Issue")]
    pub issue: String,
}

/// Builds the category groups in sorted category order.
///
/// Categories whose statistics report no affected URL are left out. An
/// issue name shown under an earlier category is not listed again, though
/// it still counts toward every category it belongs to.
pub fn build_issue_groups(expanded: &[ExpandedMappingRow], audit: &SourceAudit) -> Vec<IssueGroup> {
    let mut by_category: BTreeMap<&str, Vec<&ExpandedMappingRow>> = BTreeMap::new();
    for row in expanded {
        if row.category() == UNCATEGORIZED || is_not_available(row.issue_name()) {
            continue;
        }
        by_category.entry(row.category()).or_default().push(row);
    }

    let mut displayed: HashSet<&str> = HashSet::new();
    let mut ordinal = 0;
    let mut groups = Vec::new();
    for (category, rows) in by_category {
        let stats = category_stats(rows.iter().copied(), audit);
        if !stats.has_urls {
            tracing::debug!(category = %category, "category has no affected urls");
            continue;
        }
        let mut issues = Vec::new();
        for row in rows {
            let name = row.issue_name();
            if displayed.contains(name) {
                continue;
            }
            let urls = affected_urls(audit, name);
            if urls.is_empty() {
                continue;
            }
            displayed.insert(name);
            let entry = row.entry();
            issues.push(DisplayedIssue {
                ordinal,
                category: category.to_string(),
                name: name.to_string(),
                issue_type: entry.source_issue_type.clone(),
                description: entry.source_description.clone(),
                fix_text: entry.source_fix_text.clone(),
                urls,
            });
            ordinal += 1;
        }
        groups.push(IssueGroup {
            category: category.to_string(),
            stats,
            issues,
        });
    }
    tracing::debug!(
        groups = groups.len(),
        issues = ordinal,
        "built issue groups"
    );
    groups
}

/// Looks up a displayed issue by category and exact issue name.
pub fn find_displayed_issue<'a>(
    groups: &'a [IssueGroup],
    category: &str,
    issue: &str,
) -> Option<&'a DisplayedIssue> {
    groups
        .iter()
        .filter(|group| group.category == category)
        .flat_map(|group| group.issues.iter())
        .find(|displayed| displayed.name == issue)
}

/// Export rows `URL | Issue Type | Issue` for one displayed issue.
pub fn affected_url_rows(issue: &DisplayedIssue) -> Vec<AffectedUrlRow> {
    issue
        .urls
        .iter()
        .map(|url| AffectedUrlRow {
            url: url.clone(),
            issue_type: issue.issue_type.clone(),
            issue: issue.name.clone(),
        })
        .collect()
}
