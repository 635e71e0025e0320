//! Owner-scoped task operations keyed by the authenticated caller.

use crate::auth::domain::AuthenticatedUser;
use crate::task::{
    domain::{Task, TaskId},
    ports::TaskRepository,
    services::{CreateTaskRequest, ListTasksRequest, TaskService, TaskServiceResult},
};
use mockable::Clock;
use tracing::{debug, info};

/// Task operations on behalf of an authenticated user.
pub struct TaskBoard<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    tasks: TaskService<R, C>,
}

impl<R, C> Clone for TaskBoard<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: self.tasks.clone(),
        }
    }
}

impl<R, C> TaskBoard<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a board over a task service.
    #[must_use]
    pub const fn new(tasks: TaskService<R, C>) -> Self {
        Self { tasks }
    }

    /// Lists the caller's tasks matching the request filters.
    ///
    /// # Errors
    ///
    /// Propagates the task service errors of
    /// [`TaskService::list`].
    pub async fn list_tasks(
        &self,
        caller: &AuthenticatedUser,
        request: ListTasksRequest,
    ) -> TaskServiceResult<Vec<Task>> {
        debug!(username = %caller.username(), ?request, "listing tasks");
        self.tasks.list(caller.id(), request).await
    }

    /// Returns one of the caller's tasks.
    ///
    /// # Errors
    ///
    /// Propagates the task service errors of [`TaskService::get_by_id`].
    pub async fn get_task(
        &self,
        caller: &AuthenticatedUser,
        id: TaskId,
    ) -> TaskServiceResult<Task> {
        debug!(username = %caller.username(), task_id = %id, "fetching task");
        self.tasks.get_by_id(id, caller.id()).await
    }

    /// Creates a task owned by the caller.
    ///
    /// # Errors
    ///
    /// Propagates the task service errors of [`TaskService::create`].
    pub async fn create_task(
        &self,
        caller: &AuthenticatedUser,
        request: CreateTaskRequest,
    ) -> TaskServiceResult<Task> {
        info!(username = %caller.username(), ?request, "creating task");
        self.tasks.create(request, caller.id()).await
    }

    /// Deletes one of the caller's tasks.
    ///
    /// # Errors
    ///
    /// Propagates the task service errors of [`TaskService::delete_by_id`].
    pub async fn delete_task(
        &self,
        caller: &AuthenticatedUser,
        id: TaskId,
    ) -> TaskServiceResult<()> {
        info!(username = %caller.username(), task_id = %id, "deleting task");
        self.tasks.delete_by_id(id, caller.id()).await
    }

    /// Changes the status of one of the caller's tasks.
    ///
    /// # Errors
    ///
    /// Propagates the task service errors of
    /// [`TaskService::update_status`].
    pub async fn update_task_status(
        &self,
        caller: &AuthenticatedUser,
        id: TaskId,
        status: &str,
    ) -> TaskServiceResult<Task> {
        info!(username = %caller.username(), task_id = %id, status, "updating task status");
        self.tasks.update_status(id, status, caller.id()).await
    }
}
