//! Item Handlers

pub(crate) mod find_by_name;
pub(crate) mod get;
pub(crate) mod index;
