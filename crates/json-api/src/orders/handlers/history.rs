//! Order History Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::OrderResponse},
    state::State,
};

/// Order History Handler
///
/// Lists the user's orders, oldest first.
#[endpoint(
    tags("orders"),
    summary = "Order History",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Orders for the user"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
    ),
)]
pub(crate) async fn handler(
    username: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Vec<OrderResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let orders = state
        .app
        .orders
        .order_history(&username.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use emporium_app::domain::{
        items::records::ItemUuid,
        orders::{MockOrdersService, OrdersServiceError},
    };

    use crate::test_helpers::{make_item, make_order, orders_service};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(orders, Router::with_path("order/history/{username}").get(handler))
    }

    #[tokio::test]
    async fn test_history_returns_orders_in_order() -> TestResult {
        let mut orders = MockOrdersService::new();
        let widget = make_item(ItemUuid::new(), "Round Widget", 299);
        let first = make_order("test", std::slice::from_ref(&widget));
        let second = make_order("test", &[]);
        let expected = vec![first.uuid.into_uuid(), second.uuid.into_uuid()];

        orders
            .expect_order_history()
            .once()
            .withf(|username| username == "test")
            .return_once(move |_| Ok(vec![first, second]));

        let mut res = TestClient::get("http://example.com/order/history/test")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Vec<OrderResponse> = res.take_json().await?;
        let ids: Vec<_> = body.iter().map(|order| order.id).collect();

        assert_eq!(ids, expected);
        assert_eq!(body.last().map(|order| order.total.as_str()), Some("0"));

        Ok(())
    }

    #[tokio::test]
    async fn test_history_unknown_user_returns_404() {
        let mut orders = MockOrdersService::new();

        orders
            .expect_order_history()
            .once()
            .return_once(|_| Err(OrdersServiceError::UserNotFound));

        let res = TestClient::get("http://example.com/order/history/nobody")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
