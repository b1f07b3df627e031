//! User Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// User UUID
pub type UserUuid = TypedUuid<UserRecord>;

/// User Record
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub uuid: UserUuid,
    pub username: String,

    /// Argon2 PHC string; never the submitted plaintext.
    pub password_hash: String,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
