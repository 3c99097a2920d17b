//! Tests for audit-model types.

use audit_model::{
    IssueSeverity, MappingEntry, MappingTable, NOT_AVAILABLE, Priority, TargetFilter, TargetIssue,
};

fn entry(source: &str, target: &str) -> MappingEntry {
    MappingEntry {
        source_issue_name: source.to_string(),
        source_issue_type: "Warning".to_string(),
        source_issue_categories: "Content".to_string(),
        source_description: "desc".to_string(),
        source_fix_text: "fix".to_string(),
        target_issue_name: target.to_string(),
        target_issue_type: "Warning".to_string(),
        target_priority: "Medium".to_string(),
        target_description: String::new(),
        target_fix_text: String::new(),
        crawl_config_ref: Some("titles.seospiderconfig".to_string()),
        crawl_export_tabs: None,
    }
}

#[test]
fn table_lookup_is_exact() {
    let table = MappingTable::new(vec![
        entry("Duplicate title", "Page Titles: Duplicate"),
        entry(NOT_AVAILABLE, "Page Titles: Missing"),
    ]);
    assert_eq!(table.len(), 2);
    assert!(table.find_by_source_name("Duplicate title").is_some());
    assert!(table.find_by_source_name("duplicate title").is_none());
    assert_eq!(table.iter().filter(|e| e.is_matched()).count(), 1);
}

#[test]
fn entry_severity_uses_source_type() {
    assert_eq!(entry("a", "b").severity(), IssueSeverity::Warning);
}

#[test]
fn entry_serializes() {
    let original = entry("Duplicate title", "Page Titles: Duplicate");
    let json = serde_json::to_string(&original).expect("serialize entry");
    let round: MappingEntry = serde_json::from_str(&json).expect("deserialize entry");
    assert_eq!(round, original);
}

#[test]
fn target_filter_matches_priority_and_type() {
    let issue = TargetIssue {
        name: "Response Codes: Internal Client Error (4xx)".to_string(),
        issue_type: "Issue".to_string(),
        priority: Priority::High,
        urls: 12,
        percent_of_total: Some(1.5),
        description: String::new(),
        fix_text: String::new(),
    };
    assert!(TargetFilter::new().accepts(&issue));
    assert!(TargetFilter::new().with_priorities(["High"]).accepts(&issue));
    assert!(!TargetFilter::new().with_priorities(["Low"]).accepts(&issue));
    assert!(!TargetFilter::new().with_types(["Warning"]).accepts(&issue));
}
