//! Password hashing port.

use crate::auth::domain::{Password, PasswordDigest, PasswordSalt};
use thiserror::Error;

/// One-way, salted password hashing.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Generates a fresh random salt.
    fn generate_salt(&self) -> PasswordSalt;

    /// Derives the digest of `password` with `salt`.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordHashError`] when the salt is malformed or the
    /// hashing primitive fails.
    fn hash(
        &self,
        password: &Password,
        salt: &PasswordSalt,
    ) -> Result<PasswordDigest, PasswordHashError>;

    /// Returns `true` when `password` produces `digest`.
    ///
    /// A malformed digest never verifies.
    fn verify(&self, password: &Password, digest: &PasswordDigest) -> bool;
}

/// Failure raised by a hashing implementation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("password hashing failed: {0}")]
pub struct PasswordHashError(String);

impl PasswordHashError {
    /// Creates an error carrying the underlying failure description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
