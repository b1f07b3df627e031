//! Get User Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use emporium_app::domain::users::records::UserUuid;

use crate::{
    extensions::*,
    state::State,
    users::{errors::into_status_error, models::UserResponse},
};

/// Get User Handler
///
/// Returns a user by id.
#[endpoint(
    tags("users"),
    summary = "Get User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "User found"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = state
        .app
        .users
        .get_user(UserUuid::from_uuid(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.into()))
}
