//! Service layer for owner-scoped task operations.
//!
//! Inbound values arrive as raw strings and are validated here, before any
//! repository call. Repository faults other than a missing task are logged
//! and reported as an opaque [`TaskServiceError::InternalFailure`].

use crate::auth::domain::UserId;
use crate::task::{
    domain::{
        ParseTaskStatusError, SearchTerm, Task, TaskDomainError, TaskFilter, TaskId, TaskStatus,
        TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
}

impl CreateTaskRequest {
    /// Creates a request with the task title and description.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Request payload for listing tasks with optional filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTasksRequest {
    status: Option<String>,
    search: Option<String>,
}

impl ListTasksRequest {
    /// Creates a request that lists every task of the caller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the listing to tasks with this status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Restricts the listing to tasks whose title or description contains
    /// this text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Validates the request into a domain filter.
    fn into_filter(self) -> TaskServiceResult<TaskFilter> {
        let mut filter = TaskFilter::all();
        if let Some(status) = self.status {
            filter = filter.with_status(TaskStatus::try_from(status.as_str())?);
        }
        if let Some(search) = self.search {
            filter = filter.with_search(SearchTerm::new(search)?);
        }
        Ok(filter)
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Input shape validation failed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// The supplied status is not a member of the status set.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),

    /// No task with this identifier is visible to the caller.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Storage failed; details are logged, not returned.
    #[error("internal failure")]
    InternalFailure,
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => {
                error!(error = %other, "task repository failure");
                Self::InternalFailure
            }
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Owner-scoped task orchestration service.
pub struct TaskService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Lists the tasks owned by `owner` that match the request filters.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidStatus`] or
    /// [`TaskServiceError::Validation`] for malformed filters, and
    /// [`TaskServiceError::InternalFailure`] when storage fails.
    pub async fn list(
        &self,
        owner: UserId,
        request: ListTasksRequest,
    ) -> TaskServiceResult<Vec<Task>> {
        let filter = request.into_filter()?;
        let tasks = self.repository.list_owned(owner, &filter).await?;
        debug!(%owner, count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    /// Returns the task with `id` if it is owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist or
    /// belongs to another user, and [`TaskServiceError::InternalFailure`]
    /// when storage fails.
    pub async fn get_by_id(&self, id: TaskId, owner: UserId) -> TaskServiceResult<Task> {
        self.repository
            .find_owned(id, owner)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Creates an open task owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the title is empty and
    /// [`TaskServiceError::InternalFailure`] when storage fails.
    pub async fn create(
        &self,
        request: CreateTaskRequest,
        owner: UserId,
    ) -> TaskServiceResult<Task> {
        let CreateTaskRequest { title, description } = request;
        let task = Task::new(TaskTitle::new(title)?, description, owner, &*self.clock);
        self.repository.store(&task).await?;
        info!(task_id = %task.id(), %owner, "created task");
        Ok(task)
    }

    /// Deletes the task with `id` if it is owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when nothing was deleted and
    /// [`TaskServiceError::InternalFailure`] when storage fails.
    pub async fn delete_by_id(&self, id: TaskId, owner: UserId) -> TaskServiceResult<()> {
        self.repository.delete_owned(id, owner).await?;
        info!(task_id = %id, %owner, "deleted task");
        Ok(())
    }

    /// Sets the status of the task with `id` owned by `owner`.
    ///
    /// The status is checked against the status set before storage is
    /// touched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidStatus`] for an unknown status,
    /// [`TaskServiceError::NotFound`] when the task is not visible to
    /// `owner`, and [`TaskServiceError::InternalFailure`] when storage fails.
    pub async fn update_status(
        &self,
        id: TaskId,
        status: &str,
        owner: UserId,
    ) -> TaskServiceResult<Task> {
        let new_status = TaskStatus::try_from(status)?;
        let mut task = self.get_by_id(id, owner).await?;
        task.set_status(new_status, &*self.clock);
        self.repository.update_owned(&task).await?;
        info!(task_id = %id, %owner, status = %new_status, "updated task status");
        Ok(task)
    }
}
