//! Business logic behind the route handlers.

pub mod auth;
pub mod catalog;
pub mod orders;
