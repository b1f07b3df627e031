//! Remove From Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use emporium_app::domain::items::records::ItemUuid;

use crate::{
    carts::{
        errors::into_status_error,
        handlers::parse_quantity,
        models::{CartResponse, ModifyCartRequest},
    },
    extensions::*,
    state::State,
};

/// Remove From Cart Handler
///
/// Removes up to `quantity` of the most recently added copies of the item. Removing an
/// item the cart does not hold returns the cart unchanged.
#[endpoint(
    tags("carts"),
    summary = "Remove From Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Items removed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid quantity or payload"),
        (status_code = StatusCode::NOT_FOUND, description = "User or item not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
#[tracing::instrument(
    name = "carts.remove",
    skip(json, depot),
    fields(
        caller_uuid = tracing::field::Empty,
        item_uuid = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<ModifyCartRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let caller = depot.user_uuid_or_401()?;
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();
    let quantity = parse_quantity(request.quantity)?;
    let item = ItemUuid::from_uuid(request.item_id);

    let span = tracing::Span::current();

    span.record("caller_uuid", tracing::field::display(caller));
    span.record("item_uuid", tracing::field::display(item));
    span.record("quantity", quantity);

    let cart = state
        .app
        .carts
        .remove_from_cart(&request.username, item, quantity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
