//! Filter criteria for listing an owner's tasks.

use super::{Task, TaskDomainError, TaskStatus};
use std::fmt;

/// Non-empty substring searched for in task titles and descriptions.
///
/// Matching is case-sensitive containment, not full-text search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Creates a validated search term.
    ///
    /// The term is kept verbatim, so a run of spaces is searched for
    /// literally.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptySearchTerm`] when the value is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(TaskDomainError::EmptySearchTerm);
        }
        Ok(Self(raw))
    }

    /// Returns the search term as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Optional narrowing applied when listing tasks.
///
/// Criteria combine with logical AND. An empty filter matches every task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    status: Option<TaskStatus>,
    search: Option<SearchTerm>,
}

impl TaskFilter {
    /// Creates a filter that matches every task.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts matches to tasks with exactly `status`.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts matches to tasks whose title or description contains
    /// `search`.
    #[must_use]
    pub fn with_search(mut self, search: SearchTerm) -> Self {
        self.search = Some(search);
        self
    }

    /// Returns the status criterion, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the search criterion, if any.
    #[must_use]
    pub const fn search(&self) -> Option<&SearchTerm> {
        self.search.as_ref()
    }

    /// Returns `true` when `task` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let status_matches = self.status.is_none_or(|status| task.status() == status);
        let search_matches = self.search.as_ref().is_none_or(|term| {
            let needle = term.as_str();
            task.title().as_str().contains(needle) || task.description().contains(needle)
        });
        status_matches && search_matches
    }
}
