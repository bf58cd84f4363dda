//! Client networking: REST helpers for the server's lookup proxies.

pub mod api;
pub mod types;
