//! Item Data

use rust_decimal::Decimal;

use crate::domain::items::records::ItemUuid;

/// New Item Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub uuid: ItemUuid,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
}
