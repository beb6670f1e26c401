//! Quickbite Core - Shared types and checkout logic.
//!
//! This crate provides the domain types used across Quickbite components:
//! - `storefront` - Public-facing JSON API (auth stubs, catalog, checkout)
//! - `integration-tests` - End-to-end tests against the storefront router
//!
//! # Architecture
//!
//! The core crate contains only types, traits and pure logic - no network I/O,
//! no storage, no HTTP. Collaborators with side effects (the address directory
//! and the order submission sink) are traits, passed in by the caller.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, money and login credentials
//! - [`catalog`] - Restaurants, menus and restaurant search
//! - [`checkout`] - The checkout session: cart, pricing, wizard steps, submission

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod types;

pub use types::*;
