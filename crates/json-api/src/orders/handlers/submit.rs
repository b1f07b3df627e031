//! Submit Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::OrderResponse},
    state::State,
};

/// Submit Order Handler
///
/// Snapshots the user's cart into a new order. The cart itself is left as is.
#[endpoint(
    tags("orders"),
    summary = "Submit Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order created"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
#[tracing::instrument(
    name = "orders.submit",
    skip(username, depot),
    fields(caller_uuid = tracing::field::Empty, order_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    username: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let caller = depot.user_uuid_or_401()?;
    let state = depot.obtain_or_500::<Arc<State>>()?;

    tracing::Span::current().record("caller_uuid", tracing::field::display(caller));

    let order = state
        .app
        .orders
        .submit_order(&username.into_inner())
        .await
        .map_err(into_status_error)?;

    tracing::Span::current().record("order_uuid", tracing::field::display(order.uuid));

    Ok(Json(order.into()))
}
