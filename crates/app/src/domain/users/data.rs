//! User Data

use crate::domain::users::{errors::RegistrationError, records::UserUuid};

/// Shortest password accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 7;

/// Longest username accepted at registration.
pub const MAX_USERNAME_LENGTH: usize = 64;

/// Registration form as submitted by a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl Registration {
    /// Check the form and turn it into a user ready to be persisted.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistrationError`] describing the first rule the form breaks.
    pub fn validate(self) -> Result<NewUser, RegistrationError> {
        let username = self.username.trim();

        if username.is_empty() {
            return Err(RegistrationError::MissingUsername);
        }

        if username.chars().count() > MAX_USERNAME_LENGTH {
            return Err(RegistrationError::UsernameTooLong);
        }

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(RegistrationError::PasswordTooShort);
        }

        if self.password != self.confirm_password {
            return Err(RegistrationError::PasswordMismatch);
        }

        Ok(NewUser {
            uuid: UserUuid::new(),
            username: username.to_string(),
            password: self.password,
        })
    }
}

/// New User Data
///
/// `password` is plaintext here; the service hashes it before it is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub uuid: UserUuid,
    pub username: String,
    pub password: String,
}
