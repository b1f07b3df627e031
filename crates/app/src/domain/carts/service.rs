//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};

use crate::{
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError,
            records::CartRecord,
            repositories::{PgCartItemsRepository, PgCartsRepository},
        },
        items::{records::ItemUuid, repository::PgItemsRepository},
        users::repository::PgUsersRepository,
    },
};

/// Largest quantity accepted by a single add or remove.
pub const MAX_QUANTITY: u32 = 1_000;

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts_repository: PgCartsRepository,
    cart_items_repository: PgCartItemsRepository,
    items_repository: PgItemsRepository,
    users_repository: PgUsersRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            cart_items_repository: PgCartItemsRepository::new(),
            items_repository: PgItemsRepository::new(),
            users_repository: PgUsersRepository::new(),
        }
    }

    /// Resolves the user and item, then locks the user's cart for the rest of `tx`.
    async fn lock_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        username: &str,
        item: ItemUuid,
    ) -> Result<CartRecord, CartsServiceError> {
        let user = self
            .users_repository
            .find_user_by_username(tx, username)
            .await?
            .ok_or(CartsServiceError::UserNotFound)?;

        self.items_repository
            .get_item(tx, item)
            .await?
            .ok_or(CartsServiceError::ItemNotFound)?;

        let cart = self
            .carts_repository
            .lock_cart_for_user(tx, user.uuid)
            .await?;

        Ok(cart)
    }

    async fn finish(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartRecord,
    ) -> Result<CartRecord, CartsServiceError> {
        let mut cart = self
            .carts_repository
            .update_cart_total(tx, cart.uuid)
            .await?;

        let items = self
            .cart_items_repository
            .get_cart_items(tx, cart.uuid)
            .await?;

        cart.items.extend(items);

        Ok(cart)
    }
}

fn validate_quantity(quantity: u32) -> Result<i32, CartsServiceError> {
    if !(1..=MAX_QUANTITY).contains(&quantity) {
        return Err(CartsServiceError::InvalidQuantity { max: MAX_QUANTITY });
    }

    i32::try_from(quantity)
        .map_err(|_error| CartsServiceError::InvalidQuantity { max: MAX_QUANTITY })
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, username: &str) -> Result<CartRecord, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self
            .users_repository
            .find_user_by_username(&mut tx, username)
            .await?
            .ok_or(CartsServiceError::UserNotFound)?;

        let mut cart = self
            .carts_repository
            .get_cart_for_user(&mut tx, user.uuid)
            .await?;

        let items = self
            .cart_items_repository
            .get_cart_items(&mut tx, cart.uuid)
            .await?;

        tx.commit().await?;

        cart.items.extend(items);

        Ok(cart)
    }

    async fn add_to_cart(
        &self,
        username: &str,
        item: ItemUuid,
        quantity: u32,
    ) -> Result<CartRecord, CartsServiceError> {
        let quantity = validate_quantity(quantity)?;

        let mut tx = self.db.begin().await?;

        let cart = self.lock_cart(&mut tx, username, item).await?;

        self.cart_items_repository
            .add_cart_items(&mut tx, cart.uuid, item, quantity)
            .await?;

        let cart = self.finish(&mut tx, cart).await?;

        tx.commit().await?;

        tracing::debug!(
            cart_uuid = %cart.uuid,
            item_uuid = %item,
            quantity,
            "added items to cart"
        );

        Ok(cart)
    }

    async fn remove_from_cart(
        &self,
        username: &str,
        item: ItemUuid,
        quantity: u32,
    ) -> Result<CartRecord, CartsServiceError> {
        let quantity = validate_quantity(quantity)?;

        let mut tx = self.db.begin().await?;

        let cart = self.lock_cart(&mut tx, username, item).await?;

        let removed = self
            .cart_items_repository
            .remove_cart_items(&mut tx, cart.uuid, item, i64::from(quantity))
            .await?;

        let cart = self.finish(&mut tx, cart).await?;

        tx.commit().await?;

        tracing::debug!(
            cart_uuid = %cart.uuid,
            item_uuid = %item,
            removed,
            "removed items from cart"
        );

        Ok(cart)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the cart owned by `username`, items in insertion order.
    async fn get_cart(&self, username: &str) -> Result<CartRecord, CartsServiceError>;

    /// Append `quantity` copies of `item` and recompute the total.
    async fn add_to_cart(
        &self,
        username: &str,
        item: ItemUuid,
        quantity: u32,
    ) -> Result<CartRecord, CartsServiceError>;

    /// Remove up to `quantity` of the most recently added copies of `item` and
    /// recompute the total, so a remove undoes an add of the same quantity.
    ///
    /// Removing an item that is not in the cart leaves it unchanged.
    async fn remove_from_cart(
        &self,
        username: &str,
        item: ItemUuid,
        quantity: u32,
    ) -> Result<CartRecord, CartsServiceError>;
}
