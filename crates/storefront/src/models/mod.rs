//! Request, response, and session types for the JSON API.
//!
//! Every body uses camelCase field names.

pub mod auth;
pub mod checkout;
pub mod session;

pub use session::{CurrentUser, keys as session_keys};
