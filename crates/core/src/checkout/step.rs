//! Wizard steps and payment methods.

use serde::{Deserialize, Serialize};

/// Checkout wizard step. Transitions are strictly linear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    /// Reviewing line items and notes.
    #[default]
    Cart,
    /// Choosing a delivery address.
    Delivery,
    /// Choosing a payment method and placing the order.
    Payment,
}

impl CheckoutStep {
    /// The step after this one, or `None` at the last step.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Cart => Some(Self::Delivery),
            Self::Delivery => Some(Self::Payment),
            Self::Payment => None,
        }
    }

    /// The step before this one, or `None` at the first step.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Cart => None,
            Self::Delivery => Some(Self::Cart),
            Self::Payment => Some(Self::Delivery),
        }
    }

    /// 1-based position, as shown in "Step 2 of 3".
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Cart => 1,
            Self::Delivery => 2,
            Self::Payment => 3,
        }
    }
}

impl std::fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cart => write!(f, "cart"),
            Self::Delivery => write!(f, "delivery"),
            Self::Payment => write!(f, "payment"),
        }
    }
}

/// How the customer pays on delivery.
///
/// Card details are collected by the payment form but never reach the
/// checkout session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Card,
    Cash,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Card => write!(f, "card"),
            Self::Cash => write!(f, "cash"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(Self::Card),
            "cash" => Ok(Self::Cash),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}
