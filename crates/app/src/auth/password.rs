//! Password hashing.

use argon2::{
    Argon2,
    password_hash::{
        self, PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
        rand_core::OsRng,
    },
};
use mockall::automock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("failed to hash password")]
    Hash(#[source] password_hash::Error),

    #[error("stored password hash is malformed")]
    MalformedHash(#[source] password_hash::Error),
}

/// Well-formed Argon2id hash with the default parameters that matches no
/// password. Verified against when a login names an unknown user so both
/// paths pay for one Argon2 run.
pub(crate) const DUMMY_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$e/1gBbvOW2JPdFObLl2TIA$2Sxzqhb9+2BOTCD0SOeFrkxpi3UcVvo9FnnEXiqQpg0";

/// One-way password hashing used for stored user credentials.
#[automock]
pub trait PasswordHasher: Send + Sync {
    /// Hash `password` with a fresh salt, returning a PHC string.
    fn hash(&self, password: &str) -> Result<String, PasswordHashError>;

    /// Check `password` against a PHC string produced by [`PasswordHasher::hash`].
    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordHashError>;
}

/// Argon2id with the crate's default parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(PasswordHashError::Hash)?;

        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordHashError> {
        let parsed = PasswordHash::new(hash).map_err(PasswordHashError::MalformedHash)?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(error) => Err(PasswordHashError::MalformedHash(error)),
        }
    }
}
