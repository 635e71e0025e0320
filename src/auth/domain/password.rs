//! Password secrets, salts and digests.
//!
//! Raw passwords only live as [`Password`] values, which wipe their buffer
//! on drop and never print their contents. What gets stored is a
//! [`PasswordDigest`] produced by a hashing port.

use super::CredentialDomainError;
use std::fmt;
use std::ops::RangeInclusive;
use zeroize::Zeroizing;

/// Accepted password length in characters.
const PASSWORD_LENGTH: RangeInclusive<usize> = 8..=20;

/// Plaintext password supplied by a caller.
#[derive(Clone)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Creates a password for a new account, enforcing the strength policy.
    ///
    /// A password must be 8 to 20 characters long and contain an upper-case
    /// letter, a lower-case letter, and either a digit or a non-word
    /// character.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialDomainError::InvalidPasswordLength`] or
    /// [`CredentialDomainError::WeakPassword`] when the policy is not met.
    pub fn new(value: impl Into<String>) -> Result<Self, CredentialDomainError> {
        let secret = Zeroizing::new(value.into());
        let length = secret.chars().count();
        if !PASSWORD_LENGTH.contains(&length) {
            return Err(CredentialDomainError::InvalidPasswordLength(length));
        }
        if !is_strong(&secret) {
            return Err(CredentialDomainError::WeakPassword);
        }
        Ok(Self(secret))
    }

    /// Wraps a password presented for verification.
    ///
    /// No policy is applied: a sign-in attempt with a malformed password is
    /// simply a failed match.
    #[must_use]
    pub fn for_verification(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    /// Returns the plaintext for hashing.
    #[must_use]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

fn is_strong(secret: &str) -> bool {
    let has_upper = secret.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = secret.chars().any(|c| c.is_ascii_lowercase());
    let has_digit_or_symbol = secret
        .chars()
        .any(|c| c.is_ascii_digit() || !(c.is_ascii_alphanumeric() || c == '_'));
    has_upper && has_lower && has_digit_or_symbol
}

/// Random per-user salt in the hasher's text encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordSalt(String);

impl PasswordSalt {
    /// Wraps an encoded salt produced by a hashing port.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the encoded salt.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One-way digest of a password and its salt.
///
/// The digest embeds its salt and parameters, so it is all that is stored.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Wraps an encoded digest.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the encoded digest.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(<redacted>)")
    }
}
