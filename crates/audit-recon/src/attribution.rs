//! URL attribution: which pages of the source audit carry a given issue.

use audit_ingest::SourceAudit;

/// Finds the audit column for `issue` by case-insensitive exact comparison.
///
/// When several columns fold to the same name the first one in file order
/// wins; the others are ignored here and only merged by
/// [`issue_url_counts`](crate::issue_url_counts).
pub fn find_issue_column<'a>(audit: &'a SourceAudit, issue: &str) -> Option<&'a str> {
    let wanted = issue.to_lowercase();
    audit
        .issue_columns()
        .find(|column| column.to_lowercase() == wanted)
}

/// Page URLs flagged for `issue`, in audit row order.
///
/// A row is flagged when the issue column's value, read as a number, is
/// strictly positive. No matching column means no affected URLs.
pub fn affected_urls(audit: &SourceAudit, issue: &str) -> Vec<String> {
    let Some(column) = find_issue_column(audit, issue) else {
        tracing::trace!(issue = %issue, "no audit column for issue");
        return Vec::new();
    };
    let urls: Vec<String> = audit
        .flagged_rows(column)
        .into_iter()
        .map(|row| audit.page_url(row))
        .collect();
    tracing::trace!(issue = %issue, column = %column, url_count = urls.len(), "attributed urls");
    urls
}

/// Merge key for issue names: all whitespace removed, case folded.
pub fn normalize_issue_key(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Every audit column whose merge key equals `key`, in file order.
pub fn equivalent_columns<'a>(audit: &'a SourceAudit, key: &str) -> Vec<&'a str> {
    audit
        .issue_columns()
        .filter(|column| normalize_issue_key(column) == key)
        .collect()
}
