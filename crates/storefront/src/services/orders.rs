//! Order submission sinks.
//!
//! [`OrderDesk`] is where placed orders end up: it checks the restaurant's
//! minimum order and logs the order. [`TimeoutSink`] bounds how long any
//! sink may take. [`InFlightOrders`] keeps a visitor to one submission at a
//! time.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use quickbite_core::catalog::Catalog;
use quickbite_core::checkout::{OrderSubmission, SubmissionRejected, SubmissionSink};
use quickbite_core::{CurrencyCode, Price};

/// Accepts orders for restaurants in the catalog.
#[derive(Debug, Clone)]
pub struct OrderDesk {
    catalog: Arc<Catalog>,
}

impl OrderDesk {
    #[must_use]
    pub const fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    fn check(&self, order: &OrderSubmission) -> Result<(), SubmissionRejected> {
        let restaurant = order
            .line_items
            .first()
            .and_then(|line| self.catalog.restaurant(&line.restaurant_id))
            .ok_or_else(|| SubmissionRejected::new("This restaurant is not taking orders"))?;

        if order.pricing.subtotal < restaurant.min_order {
            return Err(SubmissionRejected::new(format!(
                "Minimum order for {} is {}",
                restaurant.name,
                Price::new(restaurant.min_order, CurrencyCode::USD)
            )));
        }
        Ok(())
    }
}

impl SubmissionSink for OrderDesk {
    async fn submit(&self, order: &OrderSubmission) -> Result<(), SubmissionRejected> {
        if let Err(rejection) = self.check(order) {
            tracing::info!(reason = %rejection, "Order rejected");
            return Err(rejection);
        }

        tracing::info!(
            line_items = order.line_items.len(),
            address_id = %order.address.id,
            deliver_to = %order.address.one_line(),
            payment_method = %order.payment_method,
            subtotal = %order.pricing.subtotal,
            total = %order.pricing.total,
            has_note = !order.order_note.is_empty(),
            "Order placed"
        );
        Ok(())
    }
}

/// Rejects any submission the inner sink has not answered within `limit`.
#[derive(Debug, Clone)]
pub struct TimeoutSink<S> {
    inner: S,
    limit: Duration,
}

impl<S> TimeoutSink<S> {
    #[must_use]
    pub const fn new(inner: S, limit: Duration) -> Self {
        Self { inner, limit }
    }
}

impl<S> SubmissionSink for TimeoutSink<S>
where
    S: SubmissionSink + Sync,
{
    async fn submit(&self, order: &OrderSubmission) -> Result<(), SubmissionRejected> {
        if let Ok(outcome) = tokio::time::timeout(self.limit, self.inner.submit(order)).await {
            outcome
        } else {
            tracing::warn!(limit_ms = self.limit.as_millis(), "Order submission timed out");
            Err(SubmissionRejected::new(
                "The restaurant did not respond in time. Please try again.",
            ))
        }
    }
}

/// Keys (session ids) with a submission currently running.
///
/// Each request loads its own copy of the checkout, so two submits on one
/// cookie would otherwise both reach the sink.
#[derive(Debug, Clone, Default)]
pub struct InFlightOrders {
    keys: Arc<Mutex<HashSet<String>>>,
}

impl InFlightOrders {
    /// Claim `key`. `None` if a submission for it is already running.
    #[must_use]
    pub fn begin(&self, key: impl Into<String>) -> Option<InFlightGuard> {
        let key = key.into();
        let inserted = self
            .keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.clone());
        inserted.then(|| InFlightGuard {
            keys: Arc::clone(&self.keys),
            key,
        })
    }
}

/// Releases its key when dropped.
#[derive(Debug)]
pub struct InFlightGuard {
    keys: Arc<Mutex<HashSet<String>>>,
    key: String,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}
