//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use emporium_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::UserNotFound => StatusError::not_found().brief("User not found"),
        OrdersServiceError::NotFound => StatusError::not_found().brief("Cart not found"),
        OrdersServiceError::AlreadyExists
        | OrdersServiceError::InvalidReference
        | OrdersServiceError::InvalidData => StatusError::bad_request().brief("Invalid order"),
        OrdersServiceError::Sql(source) => {
            error!("orders storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
