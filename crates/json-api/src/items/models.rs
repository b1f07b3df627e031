//! Item Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emporium_app::domain::{items::records::ItemRecord, orders::records::OrderItemRecord};

/// Catalog item as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ItemResponse {
    /// The unique identifier of the item
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Unit price as a decimal string, e.g. `"2.99"`
    pub price: String,

    /// Optional long description
    pub description: Option<String>,
}

impl From<ItemRecord> for ItemResponse {
    fn from(item: ItemRecord) -> Self {
        ItemResponse {
            id: item.uuid.into_uuid(),
            name: item.name,
            price: item.price.to_string(),
            description: item.description,
        }
    }
}

impl From<OrderItemRecord> for ItemResponse {
    fn from(item: OrderItemRecord) -> Self {
        ItemResponse {
            id: item.item_uuid.into_uuid(),
            name: item.name,
            price: item.price.to_string(),
            description: item.description,
        }
    }
}
