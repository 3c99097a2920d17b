//! Target-tool audit export: one summary row per issue type.

use std::path::Path;

use audit_model::{Priority, TargetIssue, or_uncategorized};
use polars::prelude::*;

use crate::error::{IngestError, Result};
use crate::polars_utils::{any_to_f64, any_to_string};
use crate::reader::read_csv_frame;

/// Header names of the target-tool export.
pub struct TargetColumns;

impl TargetColumns {
    pub const NAME: &'static str = "Issue Name";
    pub const TYPE: &'static str = "Issue Type";
    pub const PRIORITY: &'static str = "Issue Priority";
    pub const URLS: &'static str = "URLs";
    pub const PERCENT_OF_TOTAL: &'static str = "% of Total";
    pub const DESCRIPTION: &'static str = "Description";
    pub const FIX: &'static str = "How To Fix";

    pub const REQUIRED: [&'static str; 7] = [
        Self::NAME,
        Self::TYPE,
        Self::PRIORITY,
        Self::URLS,
        Self::PERCENT_OF_TOTAL,
        Self::DESCRIPTION,
        Self::FIX,
    ];
}

/// Loaded target-tool audit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TargetAudit {
    pub issues: Vec<TargetIssue>,
}

/// Loads the target-tool export from `path`.
///
/// Fails when a `% of Total` cell is not a decimal-comma or decimal-point number.
pub fn load_target_audit(path: &Path) -> Result<TargetAudit> {
    let frame = read_csv_frame(path)?;
    for column in TargetColumns::REQUIRED {
        if frame.column(column).is_err() {
            return Err(IngestError::MissingColumn {
                column: column.to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    let audit = TargetAudit::from_frame(&frame)?;
    tracing::info!(
        path = %path.display(),
        issues = audit.issues.len(),
        "loaded target audit"
    );
    Ok(audit)
}

/// Parses a percent cell written with a decimal comma ("12,5") or point ("12.5").
///
/// Blank cells yield `Ok(None)`.
pub fn parse_percent(raw: &str) -> std::result::Result<Option<f64>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .map(Some)
        .map_err(|_| trimmed.to_string())
}

impl TargetAudit {
    pub fn from_frame(frame: &DataFrame) -> Result<Self> {
        let column = |name: &str| {
            frame.column(name).map_err(|_| IngestError::ColumnNotFound {
                column: name.to_string(),
            })
        };
        let names = column(TargetColumns::NAME)?;
        let types = column(TargetColumns::TYPE)?;
        let priorities = column(TargetColumns::PRIORITY)?;
        let urls = column(TargetColumns::URLS)?;
        let percents = column(TargetColumns::PERCENT_OF_TOTAL)?;
        let descriptions = column(TargetColumns::DESCRIPTION)?;
        let fixes = column(TargetColumns::FIX)?;

        let cell = |values: &Column, row: usize| {
            any_to_string(values.get(row).unwrap_or(AnyValue::Null))
        };

        let mut issues = Vec::with_capacity(frame.height());
        for row in 0..frame.height() {
            let percent_of_total =
                parse_percent(&cell(percents, row)).map_err(|value| IngestError::InvalidValue {
                    field: TargetColumns::PERCENT_OF_TOTAL.to_string(),
                    value,
                    row: row + 1,
                })?;
            let affected = any_to_f64(urls.get(row).unwrap_or(AnyValue::Null))
                .filter(|count| *count > 0.0)
                .map_or(0, |count| count as u64);
            issues.push(TargetIssue {
                name: cell(names, row).trim().to_string(),
                issue_type: or_uncategorized(&cell(types, row)),
                priority: Priority::parse(&or_uncategorized(&cell(priorities, row))),
                urls: affected,
                percent_of_total,
                description: cell(descriptions, row),
                fix_text: cell(fixes, row),
            });
        }
        Ok(Self { issues })
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_accepts_decimal_comma() {
        assert_eq!(parse_percent("12,5"), Ok(Some(12.5)));
        assert_eq!(parse_percent("3.25"), Ok(Some(3.25)));
        assert_eq!(parse_percent(" "), Ok(None));
        assert_eq!(parse_percent("abc"), Err("abc".to_string()));
    }

    fn frame(percent: Vec<Option<&str>>, priority: Vec<Option<&str>>) -> DataFrame {
        let rows = percent.len();
        DataFrame::new(vec![
            Series::new(TargetColumns::NAME.into(), vec!["Missing H1"; rows]).into_column(),
            Series::new(TargetColumns::TYPE.into(), vec![None::<&str>; rows]).into_column(),
            Series::new(TargetColumns::PRIORITY.into(), priority).into_column(),
            Series::new(TargetColumns::URLS.into(), vec![Some(4i64); rows]).into_column(),
            Series::new(TargetColumns::PERCENT_OF_TOTAL.into(), percent).into_column(),
            Series::new(TargetColumns::DESCRIPTION.into(), vec!["d"; rows]).into_column(),
            Series::new(TargetColumns::FIX.into(), vec!["f"; rows]).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn from_frame_normalizes_missing_type_and_priority() {
        let audit = TargetAudit::from_frame(&frame(vec![Some("12,5")], vec![None])).unwrap();
        let issue = &audit.issues[0];
        assert_eq!(issue.issue_type, "Uncategorized");
        assert_eq!(issue.priority.as_str(), "Uncategorized");
        assert!(!issue.priority.is_classified());
        assert_eq!(issue.percent_of_total, Some(12.5));
        assert_eq!(issue.urls, 4);
    }

    #[test]
    fn from_frame_rejects_non_numeric_percent() {
        let result = TargetAudit::from_frame(&frame(
            vec![Some("1,0"), Some("abc")],
            vec![Some("High"), Some("Low")],
        ));
        assert!(matches!(
            result,
            Err(IngestError::InvalidValue { row: 2, ref value, .. }) if value == "abc"
        ));
    }
}
