//! Source-tool issue severities and the chart colours derived from them.

use std::fmt;

use serde::Serialize;

/// Severity bucket of a source-tool issue type.
///
/// Classification is a case-insensitive substring match on the free-text
/// issue type, so custom labels such as "Critical error" still land in the
/// right bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum IssueSeverity {
    Error,
    Warning,
    Notice,
}

impl IssueSeverity {
    /// Classify an issue type: "error" wins over "warning", anything else is a notice.
    pub fn classify(issue_type: &str) -> Self {
        let lowered = issue_type.to_lowercase();
        if lowered.contains("error") {
            Self::Error
        } else if lowered.contains("warning") {
            Self::Warning
        } else {
            Self::Notice
        }
    }

    /// Every severity, most severe first.
    pub const ALL: [Self; 3] = [Self::Error, Self::Warning, Self::Notice];

    /// Label of the statistics bucket this severity counts toward.
    pub const fn bucket_label(self) -> &'static str {
        match self {
            Self::Error => "Issues",
            Self::Warning => "Warnings",
            Self::Notice => "Notices",
        }
    }

    pub const fn color(self) -> ChartColor {
        match self {
            Self::Error => ChartColor::Red,
            Self::Warning => ChartColor::Yellow,
            Self::Notice => ChartColor::Green,
        }
    }
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Notice => "Notice",
        };
        f.write_str(label)
    }
}

/// Display colour for chart bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartColor {
    Red,
    Yellow,
    Green,
}

impl ChartColor {
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Red => "#dc3545",
            Self::Yellow => "#ffc107",
            Self::Green => "#28a745",
        }
    }
}

/// Per-severity affected-URL counts for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub issues: usize,
    pub warnings: usize,
    pub notices: usize,
}

impl SeverityCounts {
    pub fn add(&mut self, severity: IssueSeverity, count: usize) {
        match severity {
            IssueSeverity::Error => self.issues += count,
            IssueSeverity::Warning => self.warnings += count,
            IssueSeverity::Notice => self.notices += count,
        }
    }

    pub fn get(&self, severity: IssueSeverity) -> usize {
        match severity {
            IssueSeverity::Error => self.issues,
            IssueSeverity::Warning => self.warnings,
            IssueSeverity::Notice => self.notices,
        }
    }

    pub fn total(&self) -> usize {
        self.issues + self.warnings + self.notices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_is_case_insensitive_substring() {
        assert_eq!(IssueSeverity::classify("Error"), IssueSeverity::Error);
        assert_eq!(IssueSeverity::classify("critical ERROR"), IssueSeverity::Error);
        assert_eq!(IssueSeverity::classify("Warning"), IssueSeverity::Warning);
        assert_eq!(IssueSeverity::classify("Notice"), IssueSeverity::Notice);
        assert_eq!(IssueSeverity::classify("Uncategorized"), IssueSeverity::Notice);
    }

    #[test]
    fn counts_accumulate_per_bucket() {
        let mut counts = SeverityCounts::default();
        counts.add(IssueSeverity::Error, 2);
        counts.add(IssueSeverity::Notice, 1);
        counts.add(IssueSeverity::Error, 3);
        assert_eq!(counts.issues, 5);
        assert_eq!(counts.warnings, 0);
        assert_eq!(counts.get(IssueSeverity::Notice), 1);
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn buckets_line_up_with_counts() {
        let mut counts = SeverityCounts::default();
        counts.add(IssueSeverity::classify("Warning"), 4);
        let labelled: Vec<(&str, usize)> = IssueSeverity::ALL
            .into_iter()
            .map(|severity| (severity.bucket_label(), counts.get(severity)))
            .collect();
        assert_eq!(
            labelled,
            vec![("Issues", 0), ("Warnings", 4), ("Notices", 0)]
        );
    }

    #[test]
    fn colors_follow_severity() {
        assert_eq!(IssueSeverity::Error.color().hex(), "#dc3545");
        assert_eq!(IssueSeverity::Warning.color(), ChartColor::Yellow);
        assert_eq!(IssueSeverity::Notice.color(), ChartColor::Green);
    }
}
