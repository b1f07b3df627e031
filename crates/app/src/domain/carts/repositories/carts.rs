//! Carts Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    carts::records::{CartRecord, CartUuid},
    users::records::UserUuid,
};

const CREATE_CART_SQL: &str = include_str!("../sql/create_cart.sql");
const GET_CART_FOR_USER_SQL: &str = include_str!("../sql/get_cart_for_user.sql");
const LOCK_CART_FOR_USER_SQL: &str = include_str!("../sql/lock_cart_for_user.sql");
const UPDATE_CART_TOTAL_SQL: &str = include_str!("../sql/update_cart_total.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartsRepository;

impl PgCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        user: UserUuid,
    ) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(CREATE_CART_SQL)
            .bind(cart.into_uuid())
            .bind(user.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_cart_for_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(GET_CART_FOR_USER_SQL)
            .bind(user.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Fetches the user's cart and holds a row lock on it until the transaction ends.
    pub(crate) async fn lock_cart_for_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(LOCK_CART_FOR_USER_SQL)
            .bind(user.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Recomputes the stored total from the cart's current lines.
    pub(crate) async fn update_cart_total(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(UPDATE_CART_TOTAL_SQL)
            .bind(cart.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for CartRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CartUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            items: Vec::new(),
            total: row.try_get("total")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
