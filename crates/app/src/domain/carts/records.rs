//! Cart Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::{items::records::ItemRecord, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Cart UUID
pub type CartUuid = TypedUuid<CartRecord>;

/// Cart Record
///
/// `items` keeps insertion order and may hold the same item more than once.
/// `total` is recomputed from `items` on every change.
#[derive(Debug, Clone, PartialEq)]
pub struct CartRecord {
    pub uuid: CartUuid,
    pub user_uuid: UserUuid,
    pub items: Vec<ItemRecord>,
    pub total: Decimal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
