//! Emporium domain services and persistence.
//!
//! The HTTP layer talks to the traits exported here (`UsersService`,
//! `ItemsService`, `CartsService`, `OrdersService`, `AuthService`); the
//! `Pg*` implementations run each call in one `PostgreSQL` transaction.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod uuids;

#[cfg(test)]
mod test;
