//! Get Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use emporium_app::domain::items::records::ItemUuid;

use crate::{
    extensions::*,
    items::{errors::into_status_error, models::ItemResponse},
    state::State,
};

/// Get Item Handler
///
/// Returns an item by id.
#[endpoint(
    tags("items"),
    summary = "Get Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Item found"),
        (status_code = StatusCode::NOT_FOUND, description = "Item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let item = state
        .app
        .items
        .get_item(ItemUuid::from_uuid(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(item.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use emporium_app::domain::items::{ItemsServiceError, MockItemsService};

    use crate::test_helpers::{items_service, make_item};

    use super::*;

    fn make_service(items: MockItemsService) -> Service {
        items_service(items, Router::with_path("item/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_item_returns_200() -> TestResult {
        let mut items = MockItemsService::new();
        let uuid = ItemUuid::new();

        items
            .expect_get_item()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(make_item(uuid, "Round Widget", 299)));

        let mut res = TestClient::get(format!("http://example.com/item/{uuid}"))
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ItemResponse = res.take_json().await?;

        assert_eq!(body.id, uuid.into_uuid());
        assert_eq!(body.name, "Round Widget");
        assert_eq!(body.price, "2.99");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_item_returns_404() {
        let mut items = MockItemsService::new();

        items
            .expect_get_item()
            .once()
            .return_once(|_| Err(ItemsServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/item/{}", ItemUuid::new()))
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_get_item_invalid_uuid_returns_400() {
        let mut items = MockItemsService::new();

        items.expect_get_item().never();

        let res = TestClient::get("http://example.com/item/not-a-uuid")
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
