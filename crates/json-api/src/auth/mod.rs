//! Authentication

mod errors;
pub(crate) mod login;
pub(crate) mod middleware;

pub(crate) use errors::*;
