//! Auth service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use mockall::automock;
use uuid::Uuid;

use crate::{
    auth::{
        ApiTokenVersion, AuthServiceError, IssuedApiToken, NewApiToken, PasswordHasher,
        password::DUMMY_PASSWORD_HASH,
        build_verifier_input, digests_match, format_api_token, generate_api_token_secret,
        parse_api_token, repository::PgAuthRepository, verifier_digest,
    },
    database::Db,
    domain::users::{records::UserUuid, repository::PgUsersRepository},
};

/// Default lifetime of a token issued by [`AuthService::login`].
pub const DEFAULT_TOKEN_TTL: SignedDuration = SignedDuration::from_hours(240);

#[derive(Clone)]
pub struct PgAuthService {
    db: Db,
    hasher: Arc<dyn PasswordHasher>,
    token_ttl: SignedDuration,
    repository: PgAuthRepository,
    users_repository: PgUsersRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(db: Db, hasher: Arc<dyn PasswordHasher>, token_ttl: SignedDuration) -> Self {
        Self {
            db,
            hasher,
            token_ttl,
            repository: PgAuthRepository::new(),
            users_repository: PgUsersRepository::new(),
        }
    }
}

impl std::fmt::Debug for PgAuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgAuthService")
            .field("db", &self.db)
            .field("token_ttl", &self.token_ttl)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<IssuedApiToken, AuthServiceError> {
        let mut tx = self.db.begin().await?;

        let user = self
            .users_repository
            .find_user_by_username(&mut tx, username)
            .await?;

        tx.commit().await?;

        let Some(user) = user else {
            self.hasher.verify(password, DUMMY_PASSWORD_HASH)?;

            return Err(AuthServiceError::InvalidCredentials);
        };

        if !self.hasher.verify(password, &user.password_hash)? {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let mut tx = self.db.begin().await?;

        let token_uuid = Uuid::now_v7();
        let version = ApiTokenVersion::V1;
        let secret = generate_api_token_secret();
        let token = format_api_token(token_uuid, version, &secret);

        let token_hash = verifier_digest(&build_verifier_input(
            &token_uuid,
            version,
            &user.uuid,
            &secret,
        ));

        let expires_at = Timestamp::now()
            .checked_add(self.token_ttl)
            .map_err(AuthServiceError::Expiry)?;

        let metadata = self
            .repository
            .create_api_token(
                &mut tx,
                &NewApiToken {
                    uuid: token_uuid,
                    user_uuid: user.uuid,
                    version,
                    token_hash,
                    expires_at: Some(expires_at),
                },
            )
            .await?;

        tx.commit().await?;

        tracing::info!(user_uuid = %user.uuid, token_uuid = %token_uuid, "issued api token");

        Ok(IssuedApiToken { token, metadata })
    }

    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserUuid, AuthServiceError> {
        let parsed_token =
            parse_api_token(bearer_token).map_err(|_error| AuthServiceError::NotFound)?;

        let mut tx = self.db.begin().await?;

        let token = self
            .repository
            .find_active_api_token_by_uuid(&mut tx, parsed_token.token_uuid, parsed_token.version)
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        let expected = verifier_digest(&build_verifier_input(
            &parsed_token.token_uuid,
            parsed_token.version,
            &token.user_uuid,
            &parsed_token.secret,
        ));

        if !digests_match(&expected, &token.token_hash) {
            return Err(AuthServiceError::NotFound);
        }

        // Best-effort metadata update; auth success should not depend on this write.
        let touched = self
            .repository
            .touch_api_token_last_used(&mut tx, parsed_token.token_uuid)
            .await;

        match touched {
            Ok(_) => {
                if let Err(error) = tx.commit().await {
                    tracing::warn!(%error, "failed to record api token use");
                }
            }
            Err(error) => tracing::warn!(%error, "failed to record api token use"),
        }

        Ok(token.user_uuid)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check the user's password and issue a fresh bearer token.
    async fn login(&self, username: &str, password: &str)
    -> Result<IssuedApiToken, AuthServiceError>;

    /// Resolve a bearer token to the user it was issued to.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserUuid, AuthServiceError>;
}
