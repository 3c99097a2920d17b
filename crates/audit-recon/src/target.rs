//! Target-tool views: filtering, priority buckets and per-priority totals.

use std::collections::BTreeSet;

use audit_model::{ChartColor, Priority, TargetFilter, TargetIssue};

/// Issues of one priority, in export order.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityBucket<'a> {
    pub priority: Priority,
    pub issues: Vec<&'a TargetIssue>,
}

/// Sum of affected URLs reported for one priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityTotal {
    pub priority: Priority,
    pub urls: u64,
    pub color: ChartColor,
}

pub fn filter_target_issues<'a>(
    issues: &'a [TargetIssue],
    filter: &TargetFilter,
) -> Vec<&'a TargetIssue> {
    issues.iter().filter(|issue| filter.accepts(issue)).collect()
}

/// Groups issues into High, Medium and Low buckets, in that order.
///
/// Empty buckets are omitted, as are issues with an unclassified priority.
pub fn issues_by_priority<'a>(issues: &[&'a TargetIssue]) -> Vec<PriorityBucket<'a>> {
    Priority::ORDERED
        .iter()
        .filter_map(|priority| {
            let bucket: Vec<&TargetIssue> = issues
                .iter()
                .copied()
                .filter(|issue| issue.priority == *priority)
                .collect();
            (!bucket.is_empty()).then(|| PriorityBucket {
                priority: priority.clone(),
                issues: bucket,
            })
        })
        .collect()
}

/// Affected-URL totals per classified priority, High first.
pub fn priority_totals(issues: &[&TargetIssue]) -> Vec<PriorityTotal> {
    issues_by_priority(issues)
        .into_iter()
        .filter_map(|bucket| {
            let color = bucket.priority.color()?;
            Some(PriorityTotal {
                urls: bucket.issues.iter().map(|issue| issue.urls).sum(),
                priority: bucket.priority,
                color,
            })
        })
        .collect()
}

/// Distinct target issue types, sorted.
pub fn target_type_options(issues: &[TargetIssue]) -> Vec<String> {
    issues
        .iter()
        .map(|issue| issue.issue_type.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(name: &str, issue_type: &str, priority: &str, urls: u64) -> TargetIssue {
        TargetIssue {
            name: name.to_string(),
            issue_type: issue_type.to_string(),
            priority: Priority::parse(priority),
            urls,
            percent_of_total: None,
            description: String::new(),
            fix_text: String::new(),
        }
    }

    fn issues() -> Vec<TargetIssue> {
        vec![
            issue("Missing H1", "Warning", "Low", 4),
            issue("Internal 4xx", "Issue", "High", 12),
            issue("Duplicate Title", "Opportunity", "Medium", 3),
            issue("Redirect Chain", "Issue", "High", 1),
            issue("Odd", "Issue", "Uncategorized", 9),
        ]
    }

    #[test]
    fn buckets_follow_priority_order() {
        let all = issues();
        let filtered = filter_target_issues(&all, &TargetFilter::new());
        let buckets = issues_by_priority(&filtered);
        let labels: Vec<&str> = buckets.iter().map(|b| b.priority.as_str()).collect();
        assert_eq!(labels, vec!["High", "Medium", "Low"]);
        assert_eq!(buckets[0].issues.len(), 2);
        assert_eq!(buckets[0].issues[0].name, "Internal 4xx");
    }

    #[test]
    fn totals_sum_urls_with_priority_colors() {
        let all = issues();
        let filtered = filter_target_issues(&all, &TargetFilter::new());
        let totals = priority_totals(&filtered);
        assert_eq!(
            totals,
            vec![
                PriorityTotal { priority: Priority::High, urls: 13, color: ChartColor::Red },
                PriorityTotal { priority: Priority::Medium, urls: 3, color: ChartColor::Yellow },
                PriorityTotal { priority: Priority::Low, urls: 4, color: ChartColor::Green },
            ]
        );
    }

    #[test]
    fn filter_is_exact_match_on_priority_and_type() {
        let all = issues();
        let filter = TargetFilter::new().with_priorities(["High"]).with_types(["Issue"]);
        let names: Vec<&str> = filter_target_issues(&all, &filter)
            .into_iter()
            .map(|issue| issue.name.as_str())
            .collect();
        assert_eq!(names, vec!["Internal 4xx", "Redirect Chain"]);

        let filter = TargetFilter::new().with_priorities(["Low"]).with_types(["Issue"]);
        assert!(issues_by_priority(&filter_target_issues(&all, &filter)).is_empty());
    }

    #[test]
    fn type_options_are_sorted() {
        assert_eq!(
            target_type_options(&issues()),
            vec!["Issue", "Opportunity", "Warning"]
        );
    }
}
