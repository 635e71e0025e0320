//! Repository port for owner-scoped task persistence.
//!
//! Every read and write is parameterised by the owning user. A task that
//! exists but belongs to someone else is indistinguishable from a task that
//! does not exist.

use crate::auth::domain::UserId;
use crate::task::domain::{Task, TaskFilter, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier among the tasks owned by `owner`.
    ///
    /// Returns `None` when the task does not exist or is owned by another
    /// user.
    async fn find_owned(&self, id: TaskId, owner: UserId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns the tasks owned by `owner` that match `filter`, in insertion
    /// order.
    async fn list_owned(
        &self,
        owner: UserId,
        filter: &TaskFilter,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Persists the status and timestamps of an existing task.
    ///
    /// The write only applies to a row with both the task's ID and owner.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no such row exists.
    async fn update_owned(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Deletes the task with `id` if it is owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when nothing was deleted.
    async fn delete_owned(&self, id: TaskId, owner: UserId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found for the requesting owner.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
