use serde::{Deserialize, Serialize};

use crate::sentinel::is_not_available;
use crate::severity::IssueSeverity;

/// One row of the static mapping table joining the two tools' taxonomies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    /// Source-tool issue name, matched against audit column names.
    pub source_issue_name: String,
    pub source_issue_type: String,
    /// Comma-joined list of category labels.
    pub source_issue_categories: String,
    pub source_description: String,
    pub source_fix_text: String,
    pub target_issue_name: String,
    pub target_issue_type: String,
    pub target_priority: String,
    pub target_description: String,
    pub target_fix_text: String,
    /// Crawl configuration file name, relative to the crawler config folder.
    pub crawl_config_ref: Option<String>,
    /// Report tabs to export after a crawl (e.g. `Internal:All`).
    pub crawl_export_tabs: Option<String>,
}

impl MappingEntry {
    /// True when the source tool has an equivalent issue.
    pub fn has_source(&self) -> bool {
        !is_not_available(&self.source_issue_name)
    }

    /// True when the target tool has an equivalent issue.
    pub fn has_target(&self) -> bool {
        !is_not_available(&self.target_issue_name)
    }

    /// A row is matched when both tools name the issue.
    pub fn is_matched(&self) -> bool {
        self.has_source() && self.has_target()
    }

    /// Category labels in written order, trimmed. Empty labels are kept.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.source_issue_categories.split(',').map(str::trim)
    }

    pub fn severity(&self) -> IssueSeverity {
        IssueSeverity::classify(&self.source_issue_type)
    }
}

/// The loaded mapping table. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    pub entries: Vec<MappingEntry>,
}

impl MappingTable {
    pub fn new(entries: Vec<MappingEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MappingEntry> {
        self.entries.iter()
    }

    /// First entry whose source issue name equals `name` exactly.
    pub fn find_by_source_name(&self, name: &str) -> Option<&MappingEntry> {
        self.entries
            .iter()
            .find(|entry| entry.source_issue_name == name)
    }
}

impl<'a> IntoIterator for &'a MappingTable {
    type Item = &'a MappingEntry;
    type IntoIter = std::slice::Iter<'a, MappingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A mapping entry narrowed to a single category.
///
/// The wrapped entry's `source_issue_categories` holds exactly that one
/// category, so expanding it again yields the same row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpandedMappingRow {
    entry: MappingEntry,
}

impl ExpandedMappingRow {
    pub fn new(entry: &MappingEntry, category: &str) -> Self {
        let mut entry = entry.clone();
        entry.source_issue_categories = category.to_string();
        Self { entry }
    }

    pub fn category(&self) -> &str {
        &self.entry.source_issue_categories
    }

    pub fn issue_name(&self) -> &str {
        &self.entry.source_issue_name
    }

    pub fn issue_type(&self) -> &str {
        &self.entry.source_issue_type
    }

    pub fn entry(&self) -> &MappingEntry {
        &self.entry
    }
}
