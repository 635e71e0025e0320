//! Application services for owner-scoped task management.

mod store;

pub use store::{
    CreateTaskRequest, ListTasksRequest, TaskService, TaskServiceError, TaskServiceResult,
};
