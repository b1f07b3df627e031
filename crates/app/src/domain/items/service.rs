//! Items service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::items::{
        data::NewItem,
        errors::ItemsServiceError,
        records::{ItemRecord, ItemUuid},
        repository::PgItemsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgItemsService {
    db: Db,
    repository: PgItemsRepository,
}

impl PgItemsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgItemsRepository::new(),
        }
    }
}

#[async_trait]
impl ItemsService for PgItemsService {
    async fn list_items(&self) -> Result<Vec<ItemRecord>, ItemsServiceError> {
        let mut tx = self.db.begin().await?;

        let items = self.repository.list_items(&mut tx).await?;

        tx.commit().await?;

        Ok(items)
    }

    async fn get_item(&self, item: ItemUuid) -> Result<ItemRecord, ItemsServiceError> {
        let mut tx = self.db.begin().await?;

        let item = self
            .repository
            .get_item(&mut tx, item)
            .await?
            .ok_or(ItemsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(item)
    }

    async fn find_items_by_name(&self, name: &str) -> Result<Vec<ItemRecord>, ItemsServiceError> {
        let mut tx = self.db.begin().await?;

        let items = self.repository.find_items_by_name(&mut tx, name).await?;

        tx.commit().await?;

        Ok(items)
    }

    async fn create_item(&self, item: NewItem) -> Result<ItemRecord, ItemsServiceError> {
        if item.price.is_sign_negative() {
            return Err(ItemsServiceError::InvalidData);
        }

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_item(&mut tx, item).await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait ItemsService: Send + Sync {
    /// Retrieves the whole catalog.
    async fn list_items(&self) -> Result<Vec<ItemRecord>, ItemsServiceError>;

    /// Retrieve a single item.
    async fn get_item(&self, item: ItemUuid) -> Result<ItemRecord, ItemsServiceError>;

    /// Retrieves every item whose name matches exactly. May be empty.
    async fn find_items_by_name(&self, name: &str) -> Result<Vec<ItemRecord>, ItemsServiceError>;

    /// Adds an item to the catalog.
    async fn create_item(&self, item: NewItem) -> Result<ItemRecord, ItemsServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::test::{ROUND_WIDGET, SQUARE_WIDGET, TestContext};

    use super::*;

    #[tokio::test]
    async fn list_items_returns_seeded_catalog() -> TestResult {
        let ctx = TestContext::new().await;

        let items = ctx.items.list_items().await?;
        let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();

        assert_eq!(names, ["Round Widget", "Square Widget"]);

        Ok(())
    }

    #[tokio::test]
    async fn get_item_returns_price_and_description() -> TestResult {
        let ctx = TestContext::new().await;

        let item = ctx.items.get_item(ROUND_WIDGET).await?;

        assert_eq!(item.name, "Round Widget");
        assert_eq!(item.price, Decimal::new(299, 2));
        assert_eq!(item.description.as_deref(), Some("A widget that is round"));

        Ok(())
    }

    #[tokio::test]
    async fn get_item_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.items.get_item(ItemUuid::new()).await;

        assert!(
            matches!(result, Err(ItemsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn find_items_by_name_matches_exactly() -> TestResult {
        let ctx = TestContext::new().await;

        let items = ctx.items.find_items_by_name("Square Widget").await?;

        assert_eq!(items.len(), 1, "expected exactly one match");
        assert_eq!(items.first().map(|item| item.uuid), Some(SQUARE_WIDGET));

        let none = ctx.items.find_items_by_name("square widget").await?;

        assert!(none.is_empty(), "name lookup should be case-sensitive");

        Ok(())
    }

    #[tokio::test]
    async fn create_item_is_listed() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ItemUuid::new();

        let created = ctx
            .items
            .create_item(NewItem {
                uuid,
                name: "Oval Widget".to_string(),
                price: Decimal::new(450, 2),
                description: None,
            })
            .await?;

        assert_eq!(created.uuid, uuid);
        assert_eq!(created.price, Decimal::new(450, 2));

        let items = ctx.items.list_items().await?;

        assert!(items.iter().any(|item| item.uuid == uuid));

        Ok(())
    }

    #[tokio::test]
    async fn create_item_negative_price_returns_invalid_data() {
        let ctx = TestContext::new().await;

        let result = ctx
            .items
            .create_item(NewItem {
                uuid: ItemUuid::new(),
                name: "Refund Widget".to_string(),
                price: Decimal::new(-100, 2),
                description: None,
            })
            .await;

        assert!(
            matches!(result, Err(ItemsServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
    }
}
