//! Core types for Quickbite.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod credentials;
pub mod id;
pub mod price;

pub use credentials::{CredentialError, Email, Password};
pub use id::*;
pub use price::{CurrencyCode, Price, round_money};
