//! Auth data models.

use jiff::Timestamp;
use uuid::Uuid;

use crate::{auth::ApiTokenVersion, domain::users::records::UserUuid};

/// API token data used during bearer authentication.
#[derive(Debug, Clone)]
pub(crate) struct ActiveApiToken {
    /// User the token was issued to.
    pub user_uuid: UserUuid,

    /// Token format/hash version.
    pub version: ApiTokenVersion,

    /// SHA-256 verifier digest of the token secret material.
    pub token_hash: String,
}

/// API token metadata persisted in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiTokenMetadata {
    pub uuid: Uuid,
    pub user_uuid: UserUuid,
    pub version: ApiTokenVersion,
    pub created_at: Timestamp,
    pub last_used_at: Option<Timestamp>,
    pub expires_at: Option<Timestamp>,
    pub revoked_at: Option<Timestamp>,
}

/// New API token persistence payload.
#[derive(Debug, Clone)]
pub struct NewApiToken {
    pub uuid: Uuid,
    pub user_uuid: UserUuid,
    pub version: ApiTokenVersion,
    pub token_hash: String,
    pub expires_at: Option<Timestamp>,
}

/// API token issuance result with one-time raw token.
#[derive(Debug, Clone)]
pub struct IssuedApiToken {
    pub token: String,
    pub metadata: ApiTokenMetadata,
}
