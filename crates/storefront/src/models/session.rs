//! Session-related types.

use serde::{Deserialize, Serialize};

use quickbite_core::UserId;

/// Session-stored user identity, set on login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: String,
}

/// Session keys.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the serialized `CheckoutSession`.
    pub const CHECKOUT: &str = "checkout";
}
