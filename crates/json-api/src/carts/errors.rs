//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use emporium_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::UserNotFound => StatusError::not_found().brief("User not found"),
        CartsServiceError::ItemNotFound => StatusError::not_found().brief("Item not found"),
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart not found"),
        CartsServiceError::InvalidQuantity { max } => {
            StatusError::bad_request().brief(format!("Quantity must be between 1 and {max}"))
        }
        CartsServiceError::TotalOutOfRange => {
            StatusError::bad_request().brief("Cart total is too large")
        }
        CartsServiceError::AlreadyExists
        | CartsServiceError::InvalidReference
        | CartsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid cart request")
        }
        CartsServiceError::Sql(source) => {
            error!("carts storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
