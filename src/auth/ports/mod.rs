//! Port contracts for credential management.
//!
//! Ports define infrastructure-agnostic interfaces used by credential
//! services.

pub mod hasher;
pub mod repository;

pub use hasher::{PasswordHashError, PasswordHasher};
pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};

#[cfg(test)]
pub use hasher::MockPasswordHasher;
#[cfg(test)]
pub use repository::MockUserRepository;
