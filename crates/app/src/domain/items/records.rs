//! Item Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::uuids::TypedUuid;

/// Item UUID
pub type ItemUuid = TypedUuid<ItemRecord>;

/// Item Record
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRecord {
    pub uuid: ItemUuid,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub created_at: Timestamp,
}
