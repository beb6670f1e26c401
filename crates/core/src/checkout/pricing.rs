//! Order pricing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LineItem;
use crate::types::round_money;

/// Flat delivery fee: 2.99.
pub const DELIVERY_FEE: Decimal = Decimal::from_parts(299, 0, 0, false, 2);

/// Sales tax rate applied to the subtotal: 8%.
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Derived order totals. Never stored; recomputed from the cart on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSummary {
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    /// `subtotal × 8%`, rounded to cents.
    pub tax: Decimal,
    pub total: Decimal,
}

impl PricingSummary {
    #[must_use]
    pub fn for_items(items: &[LineItem]) -> Self {
        let subtotal: Decimal = items.iter().map(LineItem::line_total).sum();
        let tax = round_money(subtotal * TAX_RATE);

        Self {
            subtotal,
            delivery_fee: DELIVERY_FEE,
            tax,
            total: subtotal + DELIVERY_FEE + tax,
        }
    }
}
