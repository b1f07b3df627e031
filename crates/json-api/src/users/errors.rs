//! User Errors

use salvo::http::StatusError;
use tracing::error;

use emporium_app::domain::users::{RegistrationError, UsersServiceError};

pub(crate) fn into_status_error(error: UsersServiceError) -> StatusError {
    match error {
        UsersServiceError::AlreadyExists => {
            StatusError::bad_request().brief("Username is already taken")
        }
        UsersServiceError::MissingRequiredData | UsersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid user payload")
        }
        UsersServiceError::NotFound => StatusError::not_found().brief("User not found"),
        UsersServiceError::Sql(source) => {
            error!("users storage error: {source}");

            StatusError::internal_server_error()
        }
        UsersServiceError::PasswordHash(source) => {
            error!("failed to hash password: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn registration_status_error(error: RegistrationError) -> StatusError {
    let brief = match error {
        RegistrationError::MissingUsername => "Username is required",
        RegistrationError::UsernameTooLong => "Username is too long",
        RegistrationError::PasswordTooShort => "Password must be at least 7 characters",
        RegistrationError::PasswordMismatch => "Password and confirmation do not match",
    };

    StatusError::bad_request().brief(brief)
}
