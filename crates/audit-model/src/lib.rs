//! Data model shared by the audit reconciliation crates.
//!
//! The two audit exports use different issue taxonomies. A static mapping
//! table joins them; the types in this crate describe that table, the
//! per-category expansion of it, and the summary rows of the target tool.

pub mod filter;
pub mod mapping;
pub mod sentinel;
pub mod severity;
pub mod target;

pub use filter::{IssueFilter, TargetFilter};
pub use mapping::{ExpandedMappingRow, MappingEntry, MappingTable};
pub use sentinel::{NOT_AVAILABLE, UNCATEGORIZED, is_not_available, or_not_available, or_uncategorized};
pub use severity::{ChartColor, IssueSeverity, SeverityCounts};
pub use target::{Priority, TargetIssue};
