//! App Context

use std::sync::Arc;

use jiff::SignedDuration;
use thiserror::Error;

use crate::{
    auth::{Argon2PasswordHasher, AuthService, PasswordHasher, PgAuthService},
    database::{self, Db},
    domain::{
        carts::{CartsService, PgCartsService},
        items::{ItemsService, PgItemsService},
        orders::{OrdersService, PgOrdersService},
        users::{PgUsersService, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Services shared by every request handler.
#[derive(Clone)]
pub struct AppContext {
    pub users: Arc<dyn UsersService>,
    pub items: Arc<dyn ItemsService>,
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
    pub auth: Arc<dyn AuthService>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Wire the Postgres-backed services around an existing pool.
    #[must_use]
    pub fn from_db(db: Db, token_ttl: SignedDuration) -> Self {
        let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::new());

        Self {
            users: Arc::new(PgUsersService::new(db.clone(), Arc::clone(&hasher))),
            items: Arc::new(PgItemsService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone())),
            auth: Arc::new(PgAuthService::new(db, hasher, token_ttl)),
        }
    }

    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        token_ttl: SignedDuration,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_db(Db::new(pool), token_ttl))
    }
}
