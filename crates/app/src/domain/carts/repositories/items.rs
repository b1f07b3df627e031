//! Cart Items Repository

use sqlx::{Postgres, Transaction, query, query_as};

use crate::domain::{
    carts::records::CartUuid,
    items::records::{ItemRecord, ItemUuid},
};

const GET_CART_ITEMS_SQL: &str = include_str!("../sql/get_cart_items.sql");
const ADD_CART_ITEMS_SQL: &str = include_str!("../sql/add_cart_items.sql");
const REMOVE_CART_ITEMS_SQL: &str = include_str!("../sql/remove_cart_items.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartItemsRepository;

impl PgCartItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Items in the cart, in the order they were added.
    pub(crate) async fn get_cart_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<Vec<ItemRecord>, sqlx::Error> {
        query_as::<Postgres, ItemRecord>(GET_CART_ITEMS_SQL)
            .bind(cart.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn add_cart_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        item: ItemUuid,
        quantity: i32,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(ADD_CART_ITEMS_SQL)
            .bind(cart.into_uuid())
            .bind(item.into_uuid())
            .bind(quantity)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Removes up to `quantity` of the most recently added lines holding `item`.
    pub(crate) async fn remove_cart_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        item: ItemUuid,
        quantity: i64,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(REMOVE_CART_ITEMS_SQL)
            .bind(cart.into_uuid())
            .bind(item.into_uuid())
            .bind(quantity)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}
