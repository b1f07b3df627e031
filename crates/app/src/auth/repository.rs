//! Auth repository.

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::{
    auth::{
        ApiTokenVersion,
        models::{ActiveApiToken, ApiTokenMetadata, NewApiToken},
    },
    domain::users::records::UserUuid,
};

const CREATE_API_TOKEN_SQL: &str = include_str!("sql/create_api_token.sql");
const FIND_ACTIVE_API_TOKEN_BY_UUID_SQL: &str =
    include_str!("sql/find_active_api_token_by_uuid.sql");
const TOUCH_API_TOKEN_LAST_USED_SQL: &str = include_str!("sql/touch_api_token_last_used.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAuthRepository;

impl PgAuthRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_api_token(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        token: &NewApiToken,
    ) -> Result<ApiTokenMetadata, sqlx::Error> {
        query_as::<Postgres, ApiTokenMetadata>(CREATE_API_TOKEN_SQL)
            .bind(token.uuid)
            .bind(token.user_uuid.into_uuid())
            .bind(token.version.as_i16())
            .bind(&token.token_hash)
            .bind(token.expires_at.map(SqlxTimestamp::from))
            .fetch_one(&mut **tx)
            .await
    }

    /// Finds a token that is neither revoked nor expired.
    pub(crate) async fn find_active_api_token_by_uuid(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        token_uuid: Uuid,
        version: ApiTokenVersion,
    ) -> Result<Option<ActiveApiToken>, sqlx::Error> {
        query_as::<Postgres, ActiveApiToken>(FIND_ACTIVE_API_TOKEN_BY_UUID_SQL)
            .bind(token_uuid)
            .bind(version.as_i16())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn touch_api_token_last_used(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        token_uuid: Uuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(TOUCH_API_TOKEN_LAST_USED_SQL)
            .bind(token_uuid)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

fn try_get_version(row: &PgRow) -> sqlx::Result<ApiTokenVersion> {
    let version: i16 = row.try_get("version")?;

    ApiTokenVersion::try_from(version).map_err(|error| sqlx::Error::ColumnDecode {
        index: "version".to_string(),
        source: Box::new(error),
    })
}

impl<'r> FromRow<'r, PgRow> for ActiveApiToken {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            version: try_get_version(row)?,
            token_hash: row.try_get("token_hash")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ApiTokenMetadata {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            version: try_get_version(row)?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            last_used_at: row
                .try_get::<Option<SqlxTimestamp>, _>("last_used_at")?
                .map(SqlxTimestamp::to_jiff),
            expires_at: row
                .try_get::<Option<SqlxTimestamp>, _>("expires_at")?
                .map(SqlxTimestamp::to_jiff),
            revoked_at: row
                .try_get::<Option<SqlxTimestamp>, _>("revoked_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
