//! Order Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emporium_app::domain::orders::records::OrderRecord;

use crate::{items::models::ItemResponse, users::models::UserResponse};

/// Order Response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    pub id: Uuid,

    /// The user who submitted the order
    pub user: UserResponse,

    /// Items as they were in the cart at submission, in cart order
    pub items: Vec<ItemResponse>,

    /// Total at submission as a decimal string
    pub total: String,

    /// RFC 3339 submission time
    pub created_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        OrderResponse {
            id: order.uuid.into_uuid(),
            user: UserResponse {
                id: order.user_uuid.into_uuid(),
                username: order.username,
            },
            items: order.items.into_iter().map(ItemResponse::from).collect(),
            total: order.total.to_string(),
            created_at: order.created_at.to_string(),
        }
    }
}
