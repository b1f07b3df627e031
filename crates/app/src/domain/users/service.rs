//! Users service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    auth::PasswordHasher,
    database::Db,
    domain::{
        carts::{records::CartUuid, repositories::PgCartsRepository},
        users::{
            data::NewUser,
            errors::UsersServiceError,
            records::{UserRecord, UserUuid},
            repository::PgUsersRepository,
        },
    },
};

#[derive(Clone)]
pub struct PgUsersService {
    db: Db,
    hasher: Arc<dyn PasswordHasher>,
    repository: PgUsersRepository,
    carts_repository: PgCartsRepository,
}

impl PgUsersService {
    #[must_use]
    pub fn new(db: Db, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            db,
            hasher,
            repository: PgUsersRepository::new(),
            carts_repository: PgCartsRepository::new(),
        }
    }
}

impl std::fmt::Debug for PgUsersService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgUsersService")
            .field("db", &self.db)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl UsersService for PgUsersService {
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError> {
        let password_hash = self.hasher.hash(&user.password)?;

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_user(&mut tx, user.uuid, &user.username, &password_hash)
            .await?;

        self.carts_repository
            .create_cart(&mut tx, CartUuid::new(), created.uuid)
            .await?;

        tx.commit().await?;

        tracing::info!(user_uuid = %created.uuid, "created user with empty cart");

        Ok(created)
    }

    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self.repository.get_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(user)
    }

    async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<UserRecord, UsersServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self
            .repository
            .find_user_by_username(&mut tx, username)
            .await?
            .ok_or(UsersServiceError::NotFound)?;

        tx.commit().await?;

        Ok(user)
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Hashes the password and stores the user together with an empty cart.
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError>;

    /// Retrieve a single user by id.
    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError>;

    /// Retrieve a single user by username.
    async fn find_user_by_username(&self, username: &str)
    -> Result<UserRecord, UsersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        auth::PasswordHasher,
        domain::carts::CartsService,
        test::{TestContext, new_user},
    };

    use super::*;

    #[tokio::test]
    async fn create_user_stores_hashed_password() -> TestResult {
        let ctx = TestContext::new().await;
        let user = new_user("test");

        let created = ctx.users.create_user(user.clone()).await?;

        assert_eq!(created.uuid, user.uuid);
        assert_eq!(created.username, "test");
        assert_ne!(created.password_hash, "testPassword");
        assert!(ctx.hasher.verify("testPassword", &created.password_hash)?);

        let stored = ctx.users.get_user(created.uuid).await?;

        assert_ne!(stored.password_hash, "testPassword");

        Ok(())
    }

    #[tokio::test]
    async fn create_user_also_creates_empty_cart() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.users.create_user(new_user("test")).await?;

        let cart = ctx.carts.get_cart("test").await?;

        assert!(cart.items.is_empty());
        assert!(cart.total.is_zero());

        Ok(())
    }

    #[tokio::test]
    async fn create_user_duplicate_username_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.users.create_user(new_user("test")).await?;

        let result = ctx.users.create_user(new_user("test")).await;

        assert!(
            matches!(result, Err(UsersServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn find_user_by_username_returns_created_user() -> TestResult {
        let ctx = TestContext::new().await;
        let created = ctx.users.create_user(new_user("test")).await?;

        let found = ctx.users.find_user_by_username("test").await?;

        assert_eq!(found.uuid, created.uuid);
        assert_eq!(found.password_hash, created.password_hash);

        Ok(())
    }

    #[tokio::test]
    async fn find_user_by_unknown_username_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.users.find_user_by_username("nobody").await;

        assert!(
            matches!(result, Err(UsersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_user_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.users.get_user(UserUuid::new()).await;

        assert!(
            matches!(result, Err(UsersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
