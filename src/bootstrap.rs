//! Composition root wiring stores, hasher and clock into services.
//!
//! The `PostgreSQL` backend expects the schema in `migrations/` to be
//! applied already, e.g. with `diesel migration run`.

use crate::auth::{
    adapters::{
        argon2_hasher::Argon2PasswordHasher, memory::InMemoryUserRepository,
        postgres::PostgresUserRepository,
    },
    ports::{PasswordHashError, PasswordHasher, UserRepository},
    services::CredentialService,
};
use crate::board::TaskBoard;
use crate::config::{HashingConfig, StorageConfig, TaskBoardConfig};
use crate::task::{
    adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
    ports::TaskRepository,
    services::TaskService,
};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use mockable::DefaultClock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Credential service over dynamically dispatched ports.
pub type AppCredentialService =
    CredentialService<dyn UserRepository, dyn PasswordHasher, DefaultClock>;

/// Task board over a dynamically dispatched task repository.
pub type AppTaskBoard = TaskBoard<dyn TaskRepository, DefaultClock>;

/// Errors raised while assembling the application.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The hashing parameters were rejected.
    #[error("invalid hashing configuration: {0}")]
    Hashing(#[from] PasswordHashError),

    /// The connection pool could not be built.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] PoolError),
}

/// Assembled services ready for use by an outer surface.
#[derive(Clone)]
pub struct Application {
    /// Sign-up and sign-in.
    pub credentials: AppCredentialService,
    /// Owner-scoped task operations.
    pub board: AppTaskBoard,
}

impl Application {
    /// Wires services over the given ports with the system clock.
    #[must_use]
    pub fn compose(
        users: Arc<dyn UserRepository>,
        tasks: Arc<dyn TaskRepository>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        let clock = Arc::new(DefaultClock);
        Self {
            credentials: CredentialService::new(users, hasher, Arc::clone(&clock)),
            board: TaskBoard::new(TaskService::new(tasks, clock)),
        }
    }

    /// Builds an application over process-local stores.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::Hashing`] when `hashing` is rejected by
    /// Argon2.
    pub fn in_memory(hashing: &HashingConfig) -> Result<Self, BootstrapError> {
        let hasher = Argon2PasswordHasher::new(hashing)?;
        info!("using in-memory storage");
        Ok(Self::compose(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(hasher),
        ))
    }

    /// Builds an application over `PostgreSQL`, sharing one pool between
    /// the user and task stores.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::Hashing`] when `hashing` is rejected and
    /// [`BootstrapError::Pool`] when the pool cannot connect.
    pub fn postgres(
        database_url: &str,
        max_connections: u32,
        hashing: &HashingConfig,
    ) -> Result<Self, BootstrapError> {
        let hasher = Argon2PasswordHasher::new(hashing)?;
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder().max_size(max_connections).build(manager)?;
        info!(max_connections, "using PostgreSQL storage");
        Ok(Self::compose(
            Arc::new(PostgresUserRepository::new(pool.clone())),
            Arc::new(PostgresTaskRepository::new(pool)),
            Arc::new(hasher),
        ))
    }

    /// Builds the application selected by `config`.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::in_memory`] or [`Self::postgres`].
    pub fn from_config(config: &TaskBoardConfig) -> Result<Self, BootstrapError> {
        match &config.storage {
            StorageConfig::Memory => Self::in_memory(&config.hashing),
            StorageConfig::Postgres {
                database_url,
                max_connections,
            } => Self::postgres(database_url, *max_connections, &config.hashing),
        }
    }
}
