//! Request-scoped extractors.
//!
//! - [`auth`] -- resolves the bearer token on a request to a user row.

pub mod auth;
