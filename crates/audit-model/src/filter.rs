//! Operator filter selections, passed explicitly into every view.
//!
//! An empty selection means "no restriction".

use std::collections::BTreeSet;

use crate::target::TargetIssue;

/// Source-tool filter: issue categories and issue types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueFilter {
    pub categories: BTreeSet<String>,
    pub types: BTreeSet<String>,
}

impl IssueFilter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.types.is_empty()
    }

    /// Exact-match type test.
    pub fn accepts_type(&self, issue_type: &str) -> bool {
        self.types.is_empty() || self.types.contains(issue_type)
    }

    /// Exact-match test against a single category.
    pub fn accepts_category(&self, category: &str) -> bool {
        self.categories.is_empty() || self.categories.contains(category)
    }

    /// OR across sub-categories: accepted when any one of them is selected.
    pub fn accepts_any_category<'a, I>(&self, categories: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.categories.is_empty() {
            return true;
        }
        categories
            .into_iter()
            .any(|category| self.categories.contains(category))
    }
}

/// Target-tool filter: priorities and issue types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetFilter {
    pub priorities: BTreeSet<String>,
    pub types: BTreeSet<String>,
}

impl TargetFilter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_priorities<I, S>(mut self, priorities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.priorities = priorities.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn accepts(&self, issue: &TargetIssue) -> bool {
        let priority_ok =
            self.priorities.is_empty() || self.priorities.contains(issue.priority.as_str());
        let type_ok = self.types.is_empty() || self.types.contains(&issue.issue_type);
        priority_ok && type_ok
    }
}
