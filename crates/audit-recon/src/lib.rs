//! Reconciliation engine for the two SEO audit exports.
//!
//! Everything here is a pure function of the mapping table, the loaded
//! audits and an explicit filter. Nothing mutates its inputs and nothing
//! fails: a mapping row without a matching audit column simply attributes
//! no URLs, and an empty chart is reported as `None`.
//!
//! # Example
//!
//! ```ignore
//! use audit_model::IssueFilter;
//! use audit_recon::{build_issue_groups, expand_categories, issue_url_counts};
//!
//! let expanded = expand_categories(&mapping);
//! let groups = build_issue_groups(&expanded, &source_audit);
//! let chart = issue_url_counts(&mapping, &source_audit, &IssueFilter::new());
//! ```

mod attribution;
mod chart;
mod compare;
mod expand;
#[cfg(test)]
mod fixtures;
mod groups;
mod options;
mod stats;
mod target;

pub use attribution::{affected_urls, equivalent_columns, find_issue_column, normalize_issue_key};
pub use chart::{IssueUrlCount, issue_url_counts};
pub use compare::{ComparisonSummary, MatchedComparison, compare_tools};
pub use expand::{expand_categories, expand_entry};
pub use groups::{
    AffectedUrlRow, DisplayedIssue, IssueGroup, affected_url_rows, build_issue_groups,
    find_displayed_issue,
};
pub use options::{category_options, default_type_selection, filter_expanded, type_options};
pub use stats::{CategoryStats, category_stats};
pub use target::{
    PriorityBucket, PriorityTotal, filter_target_issues, issues_by_priority, priority_totals,
    target_type_options,
};
