//! Auth service errors.

use sqlx::Error;
use thiserror::Error;

use crate::auth::PasswordHashError;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("token not found")]
    NotFound,

    #[error("storage error")]
    Sql(#[source] Error),

    #[error("password verification error")]
    PasswordHash(#[from] PasswordHashError),

    #[error("token expiry is out of range")]
    Expiry(#[source] jiff::Error),
}

impl From<Error> for AuthServiceError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}
