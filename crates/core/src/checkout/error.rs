//! Checkout error types.

use thiserror::Error;

use super::{CheckoutStep, SubmissionRejected};
use crate::types::{AddressId, RestaurantId};

/// Errors returned by checkout operations.
///
/// Every variant leaves the session exactly as it was before the call.
/// Referencing an unknown line item is not an error; those operations are
/// silent no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// `submit` called before reaching the payment step.
    #[error("checkout is at the {current} step; orders can only be placed from payment")]
    WrongStep { current: CheckoutStep },

    /// Continuing to payment needs a delivery address.
    #[error("select a delivery address before continuing to payment")]
    AddressRequired,

    /// Nothing to order.
    #[error("your cart is empty")]
    EmptyCart,

    /// The selected address is not in the address directory.
    #[error("delivery address {0} was not found")]
    AddressNotFound(AddressId),

    /// Carts hold items from a single restaurant.
    #[error("cart already holds items from restaurant {cart}; cannot add items from {item}")]
    RestaurantMismatch {
        cart: RestaurantId,
        item: RestaurantId,
    },

    /// The submission sink declined the order.
    #[error("order was not accepted: {0}")]
    SubmissionRejected(#[from] SubmissionRejected),
}
