//! The finished order and the sink it is handed to.

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Address, LineItem, PaymentMethod, PricingSummary};

/// Everything the restaurant needs to fulfil an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    pub line_items: Vec<LineItem>,
    /// Resolved from the address directory at submission time.
    pub address: Address,
    pub payment_method: PaymentMethod,
    pub order_note: String,
    pub pricing: PricingSummary,
    pub submitted_at: DateTime<Utc>,
}

/// A sink's refusal to take an order. Shown to the customer, who may retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct SubmissionRejected {
    pub reason: String,
}

impl SubmissionRejected {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Receives finished orders.
///
/// Accepting an order is the point of no return: the checkout session
/// clears its cart as soon as `submit` resolves to `Ok`.
pub trait SubmissionSink {
    /// Hand over an order.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionRejected`] when the order is declined.
    fn submit(
        &self,
        order: &OrderSubmission,
    ) -> impl Future<Output = Result<(), SubmissionRejected>> + Send;
}
