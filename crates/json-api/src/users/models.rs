//! User Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emporium_app::domain::users::records::UserRecord;

/// Public view of a user; the password hash is never serialised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserResponse {
    /// The unique identifier of the user
    pub id: Uuid,

    /// The user's unique login name
    pub username: String,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        UserResponse {
            id: user.uuid.into_uuid(),
            username: user.username,
        }
    }
}
