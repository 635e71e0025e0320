//! Domain model for user credentials.
//!
//! Users are identified by a unique username and authenticate with a
//! password that is only ever stored as a salted one-way digest.

mod error;
mod ids;
mod password;
mod user;

pub use error::CredentialDomainError;
pub use ids::{UserId, Username};
pub use password::{Password, PasswordDigest, PasswordSalt};
pub use user::{AuthenticatedUser, PersistedUserData, User};
