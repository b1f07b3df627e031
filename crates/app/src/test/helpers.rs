//! Test Helpers

use crate::domain::users::data::{NewUser, Registration};

/// A valid registration for `username` with the password `testPassword`.
pub(crate) fn new_user(username: &str) -> NewUser {
    Registration {
        username: username.to_string(),
        password: "testPassword".to_string(),
        confirm_password: "testPassword".to_string(),
    }
    .validate()
    .expect("registration should be valid")
}
