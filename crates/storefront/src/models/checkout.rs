//! Checkout request and response bodies.

use serde::{Deserialize, Serialize};

use quickbite_core::checkout::{CheckoutView, OrderSubmission, PaymentMethod};
use quickbite_core::{AddressId, ItemId};

/// Where the customer goes to pick restaurants and dishes.
pub const BROWSE_PATH: &str = "/restaurants";

/// Where the customer lands after placing an order.
pub const CONFIRMATION_PATH: &str = "/order-confirmation";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub item_id: ItemId,
    /// Defaults to one.
    pub quantity: Option<u32>,
}

/// New absolute quantity. Zero or less removes the line.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct QuantityRequest {
    pub quantity: i64,
}

/// Free text for special instructions or the order note.
#[derive(Debug, Clone, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRequest {
    pub address_id: AddressId,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaymentRequest {
    pub method: PaymentMethod,
}

/// The checkout view, plus a link back to browsing when the cart is empty.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    #[serde(flatten)]
    pub view: CheckoutView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browse_url: Option<&'static str>,
}

impl From<CheckoutView> for CheckoutResponse {
    fn from(view: CheckoutView) -> Self {
        let browse_url = matches!(view, CheckoutView::EmptyCart).then_some(BROWSE_PATH);
        Self { view, browse_url }
    }
}

/// Answer to "back": either the previous step or leave checkout.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BackResponse {
    Exit { exit: bool, redirect: &'static str },
    Step(CheckoutResponse),
}

impl BackResponse {
    #[must_use]
    pub const fn exit() -> Self {
        Self::Exit {
            exit: true,
            redirect: BROWSE_PATH,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub redirect: &'static str,
    pub order: OrderSubmission,
}

impl From<OrderSubmission> for SubmitResponse {
    fn from(order: OrderSubmission) -> Self {
        Self {
            success: true,
            redirect: CONFIRMATION_PATH,
            order,
        }
    }
}
