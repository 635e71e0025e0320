//! Domain model for owner-scoped task management.
//!
//! Tasks carry a title, a free-form description and a status drawn from a
//! closed set. Every task references the user that created it; ownership is
//! enforced by the store, not by the aggregate.

mod error;
mod filter;
mod ids;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use filter::{SearchTerm, TaskFilter};
pub use ids::{TaskId, TaskTitle};
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task};
