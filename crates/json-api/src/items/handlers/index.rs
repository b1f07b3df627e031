//! Item Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{extensions::*, items::models::ItemResponse, state::State};

/// Item Index Handler
///
/// Returns the whole catalog, ordered by name.
#[endpoint(
    tags("items"),
    summary = "List Items",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ItemResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let items = state
        .app
        .items
        .list_items()
        .await
        .or_500("failed to fetch items")?;

    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}
