//! Order Handlers

pub(crate) mod history;
pub(crate) mod submit;
