//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use emporium_app::domain::users::records::UserUuid;

const USER_UUID_DEPOT_KEY: &str = "authenticated_user_uuid";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Record the user the bearer token belongs to.
    fn insert_user_uuid(&mut self, user: UserUuid);

    /// The authenticated user, or 401 when the auth middleware did not run.
    fn user_uuid_or_401(&self) -> Result<UserUuid, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_user_uuid(&mut self, user: UserUuid) {
        self.insert(USER_UUID_DEPOT_KEY, user);
    }

    fn user_uuid_or_401(&self) -> Result<UserUuid, StatusError> {
        self.get::<UserUuid>(USER_UUID_DEPOT_KEY)
            .copied()
            .map_err(|_ignored| StatusError::unauthorized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_uuid_round_trips_through_depot() {
        let mut depot = Depot::new();
        let user = UserUuid::new();

        assert!(depot.user_uuid_or_401().is_err(), "empty depot has no user");

        depot.insert_user_uuid(user);

        assert_eq!(depot.user_uuid_or_401().ok(), Some(user));
    }
}
