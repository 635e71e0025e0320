//! User aggregate and the authenticated caller identity.

use super::{PasswordDigest, UserId, Username};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Registered user.
///
/// Users are created once at sign-up and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
    password_digest: PasswordDigest,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted user identifier.
    pub id: UserId,
    /// Persisted username.
    pub username: Username,
    /// Persisted password digest.
    pub password_digest: PasswordDigest,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with a fresh identifier.
    #[must_use]
    pub fn new(username: Username, password_digest: PasswordDigest, clock: &impl Clock) -> Self {
        Self {
            id: UserId::new(),
            username,
            password_digest,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            username: data.username,
            password_digest: data.password_digest,
            created_at: data.created_at,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the stored password digest.
    #[must_use]
    pub const fn password_digest(&self) -> &PasswordDigest {
        &self.password_digest
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Identity of a caller whose credentials have been checked.
///
/// Only a successful password check in the credential service produces
/// this value, so holding one is proof of authentication. Task operations
/// derive their owner from it and never from request input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthenticatedUser {
    id: UserId,
    username: Username,
}

impl AuthenticatedUser {
    pub(crate) fn from_user(user: &User) -> Self {
        Self {
            id: user.id(),
            username: user.username().clone(),
        }
    }

    /// Returns the caller's user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the caller's username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }
}
