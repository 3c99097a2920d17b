//! Target-tool issue summary rows.

use std::fmt;

use crate::severity::ChartColor;

/// Target-tool issue priority.
///
/// Anything outside High/Medium/Low keeps its raw label but is excluded
/// from priority-bucketed views.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
    Unclassified(String),
}

impl Priority {
    /// Buckets in display order.
    pub const ORDERED: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "High" => Self::High,
            "Medium" => Self::Medium,
            "Low" => Self::Low,
            other => Self::Unclassified(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Unclassified(label) => label,
        }
    }

    pub fn is_classified(&self) -> bool {
        !matches!(self, Self::Unclassified(_))
    }

    pub fn color(&self) -> Option<ChartColor> {
        match self {
            Self::High => Some(ChartColor::Red),
            Self::Medium => Some(ChartColor::Yellow),
            Self::Low => Some(ChartColor::Green),
            Self::Unclassified(_) => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One summary row of the target-tool export.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetIssue {
    pub name: String,
    pub issue_type: String,
    pub priority: Priority,
    /// Number of affected URLs reported by the target tool.
    pub urls: u64,
    /// Share of all crawled URLs, in percent. `None` when the cell was blank.
    pub percent_of_total: Option<f64>,
    pub description: String,
    pub fix_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_priorities() {
        assert_eq!(Priority::parse("High"), Priority::High);
        assert_eq!(Priority::parse(" Low "), Priority::Low);
        assert!(Priority::parse("Medium").is_classified());
    }

    #[test]
    fn unknown_priority_keeps_label() {
        let priority = Priority::parse("Uncategorized");
        assert!(!priority.is_classified());
        assert_eq!(priority.as_str(), "Uncategorized");
        assert_eq!(priority.color(), None);
    }
}
