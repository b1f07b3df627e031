//! Auth Errors

use salvo::http::StatusError;
use tracing::error;

use emporium_app::auth::AuthServiceError;

pub(crate) fn into_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::InvalidCredentials => {
            StatusError::unauthorized().brief("Invalid username or password")
        }
        AuthServiceError::NotFound => StatusError::unauthorized().brief("Invalid API token"),
        AuthServiceError::Sql(source) => {
            error!("auth storage error: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::PasswordHash(source) => {
            error!("failed to verify password: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Expiry(source) => {
            error!("failed to compute token expiry: {source}");

            StatusError::internal_server_error()
        }
    }
}
