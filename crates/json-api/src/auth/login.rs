//! Login Handler

use std::sync::Arc;

use salvo::{
    http::header::AUTHORIZATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{auth::into_status_error, extensions::*, state::State};

/// Login Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginResponse {
    /// Bearer token for the `Authorization` header; shown only once
    pub token: String,

    /// When the token stops being accepted
    pub expires_at: Option<String>,
}

/// Login Handler
///
/// Exchanges a username and password for a bearer token. The token is also
/// returned in the `Authorization` response header.
#[endpoint(
    tags("auth"),
    summary = "Log In",
    responses(
        (status_code = StatusCode::OK, description = "Token issued"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid username or password"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "auth.login", skip_all)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<LoginResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let issued = state
        .app
        .auth
        .login(&request.username, &request.password)
        .await
        .map_err(into_status_error)?;

    res.add_header(AUTHORIZATION, format!("Bearer {}", issued.token), true)
        .or_500("failed to set authorization header")?;

    Ok(Json(LoginResponse {
        token: issued.token,
        expires_at: issued.metadata.expires_at.map(|at| at.to_string()),
    }))
}
