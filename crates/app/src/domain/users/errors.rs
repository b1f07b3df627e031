//! Users service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::auth::PasswordHashError;

#[derive(Debug, Error)]
pub enum UsersServiceError {
    #[error("username already taken")]
    AlreadyExists,

    #[error("user not found")]
    NotFound,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),

    #[error("failed to hash password")]
    PasswordHash(#[from] PasswordHashError),
}

impl From<Error> for UsersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::ForeignKeyViolation | ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

/// Reasons a registration form is refused before anything is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("username is required")]
    MissingUsername,

    #[error("username is too long")]
    UsernameTooLong,

    #[error("password is too short")]
    PasswordTooShort,

    #[error("password and confirmation do not match")]
    PasswordMismatch,
}
