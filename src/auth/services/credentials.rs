//! Service layer for sign-up and password verification.
//!
//! Provides [`CredentialService`], the only producer of
//! [`AuthenticatedUser`] values.

use crate::auth::{
    domain::{AuthenticatedUser, CredentialDomainError, Password, User, Username},
    ports::{PasswordHashError, PasswordHasher, UserRepository, UserRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

/// Service-level errors for credential operations.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// Credential shape validation failed.
    #[error(transparent)]
    Validation(#[from] CredentialDomainError),

    /// The username is already registered.
    #[error("username already exists: {0}")]
    DuplicateUsername(Username),

    /// Storage or hashing failed; details are logged, not returned.
    #[error("internal failure")]
    InternalFailure,
}

impl From<UserRepositoryError> for CredentialError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::DuplicateUsername(username) => Self::DuplicateUsername(username),
            other => {
                error!(error = %other, "user repository failure");
                Self::InternalFailure
            }
        }
    }
}

impl From<PasswordHashError> for CredentialError {
    fn from(err: PasswordHashError) -> Self {
        error!(error = %err, "password hashing failure");
        Self::InternalFailure
    }
}

/// Result type for credential service operations.
pub type CredentialResult<T> = Result<T, CredentialError>;

/// Sign-up and authentication service.
pub struct CredentialService<U, H, C>
where
    U: UserRepository + ?Sized,
    H: PasswordHasher + ?Sized,
    C: Clock + Send + Sync,
{
    users: Arc<U>,
    hasher: Arc<H>,
    clock: Arc<C>,
}

impl<U, H, C> Clone for CredentialService<U, H, C>
where
    U: UserRepository + ?Sized,
    H: PasswordHasher + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            hasher: Arc::clone(&self.hasher),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<U, H, C> CredentialService<U, H, C>
where
    U: UserRepository + ?Sized,
    H: PasswordHasher + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new credential service.
    #[must_use]
    pub const fn new(users: Arc<U>, hasher: Arc<H>, clock: Arc<C>) -> Self {
        Self {
            users,
            hasher,
            clock,
        }
    }

    /// Registers a new user.
    ///
    /// A fresh salt is generated for every user and only the resulting
    /// digest is stored.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Validation`] when the username or password
    /// breaks the credential rules, [`CredentialError::DuplicateUsername`]
    /// when the username is taken, and [`CredentialError::InternalFailure`]
    /// when hashing or storage fails.
    pub async fn sign_up(&self, username: &str, password: &str) -> CredentialResult<()> {
        let checked_username = Username::new(username)?;
        let secret = Password::new(password)?;

        let salt = self.hasher.generate_salt();
        let digest = self.hasher.hash(&secret, &salt)?;
        let user = User::new(checked_username, digest, &*self.clock);
        self.users.create(&user).await?;

        info!(username = %user.username(), user_id = %user.id(), "user signed up");
        Ok(())
    }

    /// Checks a username and password pair.
    ///
    /// Returns `Ok(None)` for an unknown username, a wrong password, or a
    /// malformed username alike, so callers cannot tell these apart.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::InternalFailure`] when storage fails.
    pub async fn validate_password(
        &self,
        username: &str,
        password: &str,
    ) -> CredentialResult<Option<AuthenticatedUser>> {
        let Ok(checked_username) = Username::new(username) else {
            warn!("rejected sign-in attempt");
            return Ok(None);
        };
        let secret = Password::for_verification(password);

        match self.users.find_by_username(&checked_username).await? {
            Some(user) if self.hasher.verify(&secret, user.password_digest()) => {
                info!(username = %checked_username, "user signed in");
                Ok(Some(AuthenticatedUser::from_user(&user)))
            }
            _ => {
                warn!(username = %checked_username, "rejected sign-in attempt");
                Ok(None)
            }
        }
    }

    /// Re-resolves a session identity produced by
    /// [`validate_password`](Self::validate_password) against the store.
    ///
    /// Returns `Ok(None)` when the username no longer belongs to the same
    /// user record.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::InternalFailure`] when storage fails.
    pub async fn identify(
        &self,
        session: &AuthenticatedUser,
    ) -> CredentialResult<Option<AuthenticatedUser>> {
        let user = self.users.find_by_username(session.username()).await?;
        Ok(user
            .filter(|stored| stored.id() == session.id())
            .as_ref()
            .map(AuthenticatedUser::from_user))
    }
}
