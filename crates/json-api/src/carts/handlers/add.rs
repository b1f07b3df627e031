//! Add To Cart Handler

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

/// Add To Cart Handler
///
/// Appends `quantity` copies of the item to the user's cart.
#[endpoint(
    tags("carts"),
    summary = "Add To Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Items added"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid quantity or payload"),
        (status_code = StatusCode::NOT_FOUND, description = "User or item not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
#[tracing::instrument(
    name = "carts.add",
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
        .add_to_cart(&request.username, item, quantity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use emporium_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::test_helpers::{carts_service, make_cart, make_item};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart/addToCart").post(handler))
    }

    #[tokio::test]
    async fn test_add_to_cart_returns_cart_with_total() -> TestResult {
        let mut carts = MockCartsService::new();
        let item = make_item(ItemUuid::new(), "Round Widget", 299);
        let item_uuid = item.uuid;

        carts
            .expect_add_to_cart()
            .once()
            .withf(move |username, uuid, quantity| {
                username == "test" && *uuid == item_uuid && *quantity == 2
            })
            .return_once(move |_, _, _| Ok(make_cart(vec![item.clone(), item])));

        let mut res = TestClient::post("http://example.com/cart/addToCart")
            .json(&json!({
                "username": "test",
                "itemId": item_uuid.to_string(),
                "quantity": 2,
            }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: CartResponse = res.take_json().await?;

        assert_eq!(body.items.len(), 2);
        assert_eq!(body.total, "5.98");

        Ok(())
    }

    #[tokio::test]
    async fn test_add_to_cart_zero_quantity_returns_400() {
        let mut carts = MockCartsService::new();

        carts.expect_add_to_cart().never();

        let res = TestClient::post("http://example.com/cart/addToCart")
            .json(&json!({
                "username": "test",
                "itemId": ItemUuid::new().to_string(),
                "quantity": 0,
            }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_add_to_cart_unknown_item_returns_404() {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_to_cart()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::ItemNotFound));

        let res = TestClient::post("http://example.com/cart/addToCart")
            .json(&json!({
                "username": "test",
                "itemId": ItemUuid::new().to_string(),
                "quantity": 1,
            }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_add_to_cart_unknown_user_returns_404() {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_to_cart()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::UserNotFound));

        let res = TestClient::post("http://example.com/cart/addToCart")
            .json(&json!({
                "username": "nobody",
                "itemId": ItemUuid::new().to_string(),
                "quantity": 1,
            }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_add_to_cart_invalid_item_id_returns_400() {
        let mut carts = MockCartsService::new();

        carts.expect_add_to_cart().never();

        let res = TestClient::post("http://example.com/cart/addToCart")
            .json(&json!({
                "username": "test",
                "itemId": "not-a-uuid",
                "quantity": 1,
            }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_add_to_cart_total_overflow_returns_400() {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_to_cart()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::TotalOutOfRange));

        let res = TestClient::post("http://example.com/cart/addToCart")
            .json(&json!({
                "username": "test",
                "itemId": ItemUuid::new().to_string(),
                "quantity": 1000,
            }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
