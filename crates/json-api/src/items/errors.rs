//! Item Errors

use salvo::http::StatusError;
use tracing::error;

use emporium_app::domain::items::ItemsServiceError;

pub(crate) fn into_status_error(error: ItemsServiceError) -> StatusError {
    match error {
        ItemsServiceError::NotFound => StatusError::not_found().brief("Item not found"),
        ItemsServiceError::AlreadyExists
        | ItemsServiceError::MissingRequiredData
        | ItemsServiceError::InvalidData => StatusError::bad_request().brief("Invalid item"),
        ItemsServiceError::Sql(source) => {
            error!("items storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
