//! Argon2id implementation of the password hashing port.
//!
//! Digests are PHC strings (`$argon2id$v=19$...`) that embed the salt and
//! cost parameters, so verification needs nothing but the stored digest.

use crate::auth::{
    domain::{Password, PasswordDigest, PasswordSalt},
    ports::{PasswordHashError, PasswordHasher},
};
use crate::config::HashingConfig;
use argon2::password_hash::{PasswordHash, SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordVerifier, Version};

/// Argon2id password hasher.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    /// Creates a hasher with the given cost parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordHashError`] when the parameters are rejected by
    /// Argon2 (for example a memory cost below eight blocks per lane).
    pub fn new(config: &HashingConfig) -> Result<Self, PasswordHashError> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|err| PasswordHashError::new(err.to_string()))?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn generate_salt(&self) -> PasswordSalt {
        PasswordSalt::new(SaltString::generate(&mut OsRng).as_str())
    }

    fn hash(
        &self,
        password: &Password,
        salt: &PasswordSalt,
    ) -> Result<PasswordDigest, PasswordHashError> {
        let salt_string = SaltString::from_b64(salt.as_str())
            .map_err(|err| PasswordHashError::new(err.to_string()))?;
        let digest = argon2::PasswordHasher::hash_password(
            &self.argon2,
            password.expose_secret().as_bytes(),
            &salt_string,
        )
        .map_err(|err| PasswordHashError::new(err.to_string()))?;
        Ok(PasswordDigest::new(digest.to_string()))
    }

    fn verify(&self, password: &Password, digest: &PasswordDigest) -> bool {
        PasswordHash::new(digest.as_str()).is_ok_and(|parsed| {
            self.argon2
                .verify_password(password.expose_secret().as_bytes(), &parsed)
                .is_ok()
        })
    }
}
