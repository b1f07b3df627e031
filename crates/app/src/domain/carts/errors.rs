//! Carts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// SQLSTATE raised when a `NUMERIC` result exceeds the column precision.
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("cart already exists")]
    AlreadyExists,

    #[error("cart not found")]
    NotFound,

    #[error("user not found")]
    UserNotFound,

    #[error("item not found")]
    ItemNotFound,

    #[error("quantity must be between 1 and {max}")]
    InvalidQuantity { max: u32 },

    #[error("related resource not found")]
    InvalidReference,

    #[error("invalid data")]
    InvalidData,

    #[error("cart total is out of range")]
    TotalOutOfRange,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        if error
            .as_database_error()
            .and_then(DatabaseError::code)
            .is_some_and(|code| code == NUMERIC_VALUE_OUT_OF_RANGE)
        {
            return Self::TotalOutOfRange;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::CheckViolation | ErrorKind::NotNullViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
