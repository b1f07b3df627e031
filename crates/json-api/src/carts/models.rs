//! Cart Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emporium_app::domain::carts::records::CartRecord;

use crate::items::models::ItemResponse;

/// Add or remove `quantity` copies of an item from a user's cart.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ModifyCartRequest {
    pub username: String,
    pub item_id: Uuid,
    pub quantity: i64,
}

/// Cart Response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartResponse {
    pub id: Uuid,

    /// One entry per copy, in the order they were added
    pub items: Vec<ItemResponse>,

    /// Sum of item prices as a decimal string
    pub total: String,
}

impl From<CartRecord> for CartResponse {
    fn from(cart: CartRecord) -> Self {
        CartResponse {
            id: cart.uuid.into_uuid(),
            items: cart.items.into_iter().map(ItemResponse::from).collect(),
            total: cart.total.to_string(),
        }
    }
}
