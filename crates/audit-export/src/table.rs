//! Tabular views ready for export.

use std::fmt;

use audit_ingest::{MappingColumns, TargetColumns};
use audit_model::{MappingEntry, TargetIssue};
use audit_recon::{AffectedUrlRow, IssueUrlCount, MatchedComparison};

/// One cell of an exported table.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(value) => write!(f, "{value}"),
            Self::Empty => Ok(()),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u64> for Cell {
    fn from(value: u64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<Option<f64>> for Cell {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Empty, Self::Number)
    }
}

impl From<Option<&str>> for Cell {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Empty, |text| Self::Text(text.to_string()))
    }
}

/// A header row plus data rows, written to one worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    pub sheet_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl ExportTable {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sheet_name: "Sheet1".to_string(),
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Affected-URL download of a single issue.
    pub fn from_url_rows(rows: &[AffectedUrlRow]) -> Self {
        let mut table = Self::new(["URL", "Issue Type", "Issue"]);
        for row in rows {
            table.push_row(vec![
                row.url.as_str().into(),
                row.issue_type.as_str().into(),
                row.issue.as_str().into(),
            ]);
        }
        table
    }

    /// Every mapping column of the matched rows.
    pub fn from_matched(comparison: &MatchedComparison<'_>) -> Self {
        let mut table = Self::new(MAPPING_HEADERS);
        for entry in &comparison.rows {
            table.push_row(mapping_cells(entry));
        }
        table
    }

    /// Target-tool issues in the export's own column layout.
    pub fn from_target_issues(issues: &[&TargetIssue]) -> Self {
        let mut table = Self::new(TargetColumns::REQUIRED);
        for issue in issues {
            table.push_row(vec![
                issue.name.as_str().into(),
                issue.issue_type.as_str().into(),
                issue.priority.as_str().into(),
                issue.urls.into(),
                issue.percent_of_total.into(),
                issue.description.as_str().into(),
                issue.fix_text.as_str().into(),
            ]);
        }
        table
    }

    /// Statistics chart data.
    pub fn from_chart(counts: &[IssueUrlCount]) -> Self {
        let mut table = Self::new(["Issue", "Issue Type", "Affected URLs", "Bar Color"]);
        for count in counts {
            table.push_row(vec![
                count.issue.as_str().into(),
                count.issue_type.as_str().into(),
                (count.url_count as u64).into(),
                count.color.hex().into(),
            ]);
        }
        table
    }
}

const MAPPING_HEADERS: [&str; 12] = [
    MappingColumns::SOURCE_NAME,
    MappingColumns::SOURCE_TYPE,
    MappingColumns::SOURCE_CATEGORY,
    MappingColumns::SOURCE_DESCRIPTION,
    MappingColumns::SOURCE_FIX,
    MappingColumns::TARGET_NAME,
    MappingColumns::TARGET_TYPE,
    MappingColumns::TARGET_PRIORITY,
    MappingColumns::TARGET_DESCRIPTION,
    MappingColumns::TARGET_FIX,
    MappingColumns::CRAWL_CONFIG,
    MappingColumns::CRAWL_EXPORT_TABS,
];

fn mapping_cells(entry: &MappingEntry) -> Vec<Cell> {
    vec![
        entry.source_issue_name.as_str().into(),
        entry.source_issue_type.as_str().into(),
        entry.source_issue_categories.as_str().into(),
        entry.source_description.as_str().into(),
        entry.source_fix_text.as_str().into(),
        entry.target_issue_name.as_str().into(),
        entry.target_issue_type.as_str().into(),
        entry.target_priority.as_str().into(),
        entry.target_description.as_str().into(),
        entry.target_fix_text.as_str().into(),
        entry.crawl_config_ref.as_deref().into(),
        entry.crawl_export_tabs.as_deref().into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use audit_model::{ChartColor, Priority};

    #[test]
    fn cells_display_like_the_source_values() {
        assert_eq!(Cell::from(12u64).to_string(), "12");
        assert_eq!(Cell::from(Some(12.5)).to_string(), "12.5");
        assert_eq!(Cell::from(None::<f64>), Cell::Empty);
        assert_eq!(Cell::from("Links").to_string(), "Links");
    }

    #[test]
    fn chart_table_carries_bar_colors() {
        let counts = vec![
            IssueUrlCount {
                issue: "Broken Links".to_string(),
                issue_type: "Error".to_string(),
                color: ChartColor::Red,
                url_count: 4,
            },
            IssueUrlCount {
                issue: "Thin Content".to_string(),
                issue_type: "Notice".to_string(),
                color: ChartColor::Green,
                url_count: 1,
            },
        ];
        let table = ExportTable::from_chart(&counts);
        assert_eq!(table.headers[3], "Bar Color");
        assert_eq!(table.rows[0][2], Cell::Number(4.0));
        assert_eq!(table.rows[0][3], Cell::Text("#dc3545".to_string()));
        assert_eq!(table.rows[1][3], Cell::Text("#28a745".to_string()));
    }

    #[test]
    fn target_table_uses_export_headers() {
        let issue = TargetIssue {
            name: "Missing H1".to_string(),
            issue_type: "Warning".to_string(),
            priority: Priority::Low,
            urls: 3,
            percent_of_total: Some(0.75),
            description: "d".to_string(),
            fix_text: "f".to_string(),
        };
        let table = ExportTable::from_target_issues(&[&issue]);
        assert_eq!(table.headers[4], "% of Total");
        assert_eq!(table.rows[0][2], Cell::Text("Low".to_string()));
        assert_eq!(table.rows[0][4], Cell::Number(0.75));
    }

    #[test]
    fn url_rows_keep_order() {
        let rows = vec![
            AffectedUrlRow {
                url: "u1".to_string(),
                issue_type: "Error".to_string(),
                issue: "Broken Links".to_string(),
            },
            AffectedUrlRow {
                url: "u3".to_string(),
                issue_type: "Error".to_string(),
                issue: "Broken Links".to_string(),
            },
        ];
        let table = ExportTable::from_url_rows(&rows).with_sheet_name("Broken Links");
        assert_eq!(table.headers, vec!["URL", "Issue Type", "Issue"]);
        assert_eq!(table.rows[1][0], Cell::Text("u3".to_string()));
        assert_eq!(table.sheet_name, "Broken Links");
    }
}
