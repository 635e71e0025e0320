//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty or only whitespace.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// A search term was supplied but contains no visible characters.
    #[error("search term must not be empty when provided")]
    EmptySearchTerm,
}

/// Error returned when a status value is outside the task status set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
