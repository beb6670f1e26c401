//! Quickbite storefront library.
//!
//! JSON API over the restaurant catalog, the per-visitor checkout session,
//! and the demo auth endpoints. Exposed as a library so the router can be
//! driven in-process by tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

pub use routes::app;
