//! Find Items By Name Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    items::{errors::into_status_error, models::ItemResponse},
    state::State,
};

/// Find Items By Name Handler
///
/// Returns every item whose name matches exactly; 404 when there are none.
#[endpoint(
    tags("items"),
    summary = "Find Items By Name",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Items found"),
        (status_code = StatusCode::NOT_FOUND, description = "No item has that name"),
    ),
)]
pub(crate) async fn handler(
    name: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Vec<ItemResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let items = state
        .app
        .items
        .find_items_by_name(&name.into_inner())
        .await
        .map_err(into_status_error)?;

    if items.is_empty() {
        return Err(StatusError::not_found().brief("Item not found"));
    }

    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use emporium_app::domain::items::{MockItemsService, records::ItemUuid};

    use crate::test_helpers::{items_service, make_item};

    use super::*;

    fn make_service(items: MockItemsService) -> Service {
        items_service(items, Router::with_path("item/name/{name}").get(handler))
    }

    #[tokio::test]
    async fn test_find_by_name_decodes_path_and_returns_matches() -> TestResult {
        let mut items = MockItemsService::new();
        let uuid = ItemUuid::new();

        items
            .expect_find_items_by_name()
            .once()
            .withf(|name| name == "Round Widget")
            .return_once(move |_| Ok(vec![make_item(uuid, "Round Widget", 299)]));

        let mut res = TestClient::get("http://example.com/item/name/Round%20Widget")
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Vec<ItemResponse> = res.take_json().await?;

        assert_eq!(body.len(), 1);
        assert_eq!(body.first().map(|item| item.id), Some(uuid.into_uuid()));

        Ok(())
    }

    #[tokio::test]
    async fn test_find_by_name_without_matches_returns_404() {
        let mut items = MockItemsService::new();

        items
            .expect_find_items_by_name()
            .once()
            .return_once(|_| Ok(Vec::new()));

        let res = TestClient::get("http://example.com/item/name/Nothing")
            .send(&make_service(items))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
