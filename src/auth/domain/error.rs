//! Error types for credential validation.

use thiserror::Error;

/// Errors returned while constructing credential domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialDomainError {
    /// The username length is outside the accepted range.
    #[error("username must be between 4 and 20 characters, got {0}")]
    InvalidUsernameLength(usize),

    /// The password length is outside the accepted range.
    #[error("password must be between 8 and 20 characters, got {0}")]
    InvalidPasswordLength(usize),

    /// The password lacks a required character class.
    #[error("password too weak")]
    WeakPassword,
}
