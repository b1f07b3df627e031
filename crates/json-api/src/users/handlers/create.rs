//! Create User Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use emporium_app::domain::users::data::Registration;

use crate::{
    extensions::*,
    state::State,
    users::{
        errors::{into_status_error, registration_status_error},
        models::UserResponse,
    },
};

/// Create User Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl From<CreateUserRequest> for Registration {
    fn from(request: CreateUserRequest) -> Self {
        Registration {
            username: request.username,
            password: request.password,
            confirm_password: request.confirm_password,
        }
    }
}

/// Create User Handler
///
/// Registers a user together with an empty cart.
#[endpoint(
    tags("users"),
    summary = "Create User",
    responses(
        (status_code = StatusCode::OK, description = "User created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid input or username taken"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "users.create",
    skip(json, depot),
    fields(user_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateUserRequest>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = Registration::from(json.into_inner())
        .validate()
        .map_err(registration_status_error)?;

    let created = state
        .app
        .users
        .create_user(user)
        .await
        .map_err(into_status_error)?;

    tracing::Span::current().record("user_uuid", tracing::field::display(created.uuid));

    Ok(Json(created.into()))
}
