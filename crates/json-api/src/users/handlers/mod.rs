//! User Handlers

pub(crate) mod create;
pub(crate) mod find_by_username;
pub(crate) mod get;
