//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::{
    carts::records::CartUuid,
    items::records::ItemUuid,
    orders::records::{OrderItemRecord, OrderRecord, OrderUuid},
    users::records::UserUuid,
};

const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const COPY_CART_ITEMS_SQL: &str = include_str!("sql/copy_cart_items.sql");
const LIST_ORDERS_FOR_USER_SQL: &str = include_str!("sql/list_orders_for_user.sql");
const GET_ORDER_ITEMS_SQL: &str = include_str!("sql/get_order_items.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        user: UserUuid,
        total: Decimal,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(user.into_uuid())
            .bind(total)
            .fetch_one(&mut **tx)
            .await
    }

    /// Snapshots every line of `cart` into `order`, keeping cart order as position.
    pub(crate) async fn copy_cart_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        cart: CartUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(COPY_CART_ITEMS_SQL)
            .bind(order.into_uuid())
            .bind(cart.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn list_orders_for_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_ORDERS_FOR_USER_SQL)
            .bind(user.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_order_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        orders: &[OrderUuid],
    ) -> Result<Vec<OrderItemRecord>, sqlx::Error> {
        let uuids: Vec<Uuid> = orders.iter().map(|order| order.into_uuid()).collect();

        query_as::<Postgres, OrderItemRecord>(GET_ORDER_ITEMS_SQL)
            .bind(uuids)
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            username: row.try_get("username")?,
            items: Vec::new(),
            total: row.try_get("total")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for OrderItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            order_uuid: OrderUuid::from_uuid(row.try_get("order_uuid")?),
            position: row.try_get("position")?,
            item_uuid: ItemUuid::from_uuid(row.try_get("item_uuid")?),
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            description: row.try_get("description")?,
        })
    }
}
