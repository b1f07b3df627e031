//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;

use crate::{
    database::Db,
    domain::{
        carts::repositories::PgCartsRepository,
        orders::{
            errors::OrdersServiceError,
            records::{OrderItemRecord, OrderRecord, OrderUuid},
            repository::PgOrdersRepository,
        },
        users::repository::PgUsersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
    carts_repository: PgCartsRepository,
    users_repository: PgUsersRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
            carts_repository: PgCartsRepository::new(),
            users_repository: PgUsersRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn submit_order(&self, username: &str) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self
            .users_repository
            .find_user_by_username(&mut tx, username)
            .await?
            .ok_or(OrdersServiceError::UserNotFound)?;

        let cart = self
            .carts_repository
            .lock_cart_for_user(&mut tx, user.uuid)
            .await?;

        let mut order = self
            .repository
            .create_order(&mut tx, OrderUuid::new(), user.uuid, cart.total)
            .await?;

        self.repository
            .copy_cart_items(&mut tx, order.uuid, cart.uuid)
            .await?;

        let items = self
            .repository
            .get_order_items(&mut tx, &[order.uuid])
            .await?;

        tx.commit().await?;

        order.items.extend(items);

        tracing::info!(
            order_uuid = %order.uuid,
            user_uuid = %order.user_uuid,
            items = order.items.len(),
            total = %order.total,
            "submitted order"
        );

        Ok(order)
    }

    async fn order_history(&self, username: &str) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self
            .users_repository
            .find_user_by_username(&mut tx, username)
            .await?
            .ok_or(OrdersServiceError::UserNotFound)?;

        let mut orders = self
            .repository
            .list_orders_for_user(&mut tx, user.uuid)
            .await?;

        let order_uuids: Vec<OrderUuid> = orders.iter().map(|order| order.uuid).collect();

        let items = self
            .repository
            .get_order_items(&mut tx, &order_uuids)
            .await?;

        tx.commit().await?;

        let mut items_by_order: FxHashMap<OrderUuid, Vec<OrderItemRecord>> = FxHashMap::default();

        for item in items {
            items_by_order.entry(item.order_uuid).or_default().push(item);
        }

        for order in &mut orders {
            if let Some(items) = items_by_order.remove(&order.uuid) {
                order.items = items;
            }
        }

        Ok(orders)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Snapshot the user's cart into a new order. The cart itself is left as is.
    async fn submit_order(&self, username: &str) -> Result<OrderRecord, OrdersServiceError>;

    /// Orders submitted by `username`, oldest first.
    async fn order_history(&self, username: &str) -> Result<Vec<OrderRecord>, OrdersServiceError>;
}
