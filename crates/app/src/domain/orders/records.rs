//! Order Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::{items::records::ItemUuid, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Record
///
/// A snapshot of a cart taken when the order was submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub user_uuid: UserUuid,
    pub username: String,
    pub items: Vec<OrderItemRecord>,
    pub total: Decimal,
    pub created_at: Timestamp,
}

/// Order Item Record
///
/// Catalog fields are copied at submission time so later catalog changes do
/// not reach existing orders.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemRecord {
    pub order_uuid: OrderUuid,
    pub position: i32,
    pub item_uuid: ItemUuid,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
}
