//! Shared world state for task board BDD scenarios.

use std::collections::HashMap;

use rstest::fixture;
use taskboard::auth::{domain::AuthenticatedUser, services::CredentialError};
use taskboard::bootstrap::Application;
use taskboard::config::HashingConfig;
use taskboard::task::{domain::Task, services::TaskServiceError};

/// Password used for every scenario account.
pub const PASSWORD: &str = "Passw0rd";

/// Scenario world for task board behaviour tests.
pub struct TaskBoardWorld {
    pub app: Application,
    pub users: HashMap<String, AuthenticatedUser>,
    pub tasks: HashMap<String, Task>,
    pub last_listing: Option<Vec<Task>>,
    pub last_update: Option<Result<Task, TaskServiceError>>,
    pub last_sign_up: Option<Result<(), CredentialError>>,
}

impl TaskBoardWorld {
    /// Creates a world over a fresh in-memory application.
    ///
    /// # Panics
    ///
    /// Panics if the test hashing parameters are rejected.
    #[must_use]
    pub fn new() -> Self {
        let hashing = HashingConfig {
            memory_kib: 64,
            iterations: 1,
            parallelism: 1,
        };
        let app = Application::in_memory(&hashing).expect("cheap hashing parameters are valid");

        Self {
            app,
            users: HashMap::new(),
            tasks: HashMap::new(),
            last_listing: None,
            last_update: None,
            last_sign_up: None,
        }
    }

    /// Returns the identity of a previously signed-up user.
    ///
    /// # Errors
    ///
    /// Returns an error if `username` has not signed up in this scenario.
    pub fn user(&self, username: &str) -> Result<&AuthenticatedUser, eyre::Report> {
        self.users
            .get(username)
            .ok_or_else(|| eyre::eyre!("user {username} has not signed up in this scenario"))
    }

    /// Returns a task created earlier in the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error if no task with `title` was created.
    pub fn task(&self, title: &str) -> Result<&Task, eyre::Report> {
        self.tasks
            .get(title)
            .ok_or_else(|| eyre::eyre!("task {title} was not created in this scenario"))
    }
}

impl Default for TaskBoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskBoardWorld {
    TaskBoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
