//! Cart line items and the order-level note.

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CheckoutError;
use crate::types::{ItemId, RestaurantId};

/// One menu item in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Menu item id; unique within a cart.
    pub id: ItemId,
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: NonZeroU32,
    #[serde(default)]
    pub special_instructions: String,
}

impl LineItem {
    #[must_use]
    pub fn new(
        id: ItemId,
        restaurant_id: RestaurantId,
        name: impl Into<String>,
        unit_price: Decimal,
        quantity: NonZeroU32,
    ) -> Self {
        Self {
            id,
            restaurant_id,
            name: name.into(),
            unit_price,
            quantity,
            special_instructions: String::new(),
        }
    }

    /// Set the per-item instructions, builder style.
    #[must_use]
    pub fn with_instructions(mut self, text: impl Into<String>) -> Self {
        self.special_instructions = text.into();
        self
    }

    /// `unit_price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity.get())
    }
}

/// Ordered line items plus one free-text note for the restaurant.
///
/// Line order is display order. All lines come from one restaurant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<LineItem>,
    #[serde(default)]
    order_note: String,
}

impl Cart {
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&LineItem> {
        self.items.iter().find(|line| &line.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|line| u64::from(line.quantity.get()))
            .sum()
    }

    /// The restaurant every line belongs to, if the cart has any lines.
    #[must_use]
    pub fn restaurant_id(&self) -> Option<&RestaurantId> {
        self.items.first().map(|line| &line.restaurant_id)
    }

    #[must_use]
    pub fn order_note(&self) -> &str {
        &self.order_note
    }

    /// Add a line, or add its quantity to the existing line with the same id.
    ///
    /// A merged line keeps its position and its instructions.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::RestaurantMismatch`] if the cart already holds
    /// items from a different restaurant.
    pub fn add(&mut self, line: LineItem) -> Result<(), CheckoutError> {
        if let Some(current) = self.restaurant_id()
            && current != &line.restaurant_id
        {
            return Err(CheckoutError::RestaurantMismatch {
                cart: current.clone(),
                item: line.restaurant_id,
            });
        }

        match self.line_mut(&line.id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(line.quantity.get());
            }
            None => self.items.push(line),
        }
        Ok(())
    }

    /// Replace a line's quantity in place. Anything below 1 removes the line;
    /// values beyond `u32::MAX` saturate. Unknown ids are ignored.
    pub fn set_quantity(&mut self, id: &ItemId, new_quantity: i64) {
        if new_quantity < 1 {
            self.remove(id);
            return;
        }
        let clamped = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        let Some(quantity) = NonZeroU32::new(clamped) else {
            return;
        };
        if let Some(line) = self.line_mut(id) {
            line.quantity = quantity;
        }
    }

    /// Remove a line. Returns the removed line, or `None` for an unknown id.
    pub fn remove(&mut self, id: &ItemId) -> Option<LineItem> {
        let index = self.items.iter().position(|line| &line.id == id)?;
        Some(self.items.remove(index))
    }

    /// Replace a line's special instructions. Unknown ids are ignored.
    pub fn set_special_instructions(&mut self, id: &ItemId, text: impl Into<String>) {
        if let Some(line) = self.line_mut(id) {
            line.special_instructions = text.into();
        }
    }

    pub fn set_order_note(&mut self, text: impl Into<String>) {
        self.order_note = text.into();
    }

    /// Drop every line and the order note.
    pub fn clear(&mut self) {
        self.items.clear();
        self.order_note.clear();
    }

    fn line_mut(&mut self, id: &ItemId) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|line| &line.id == id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line(id: &str, restaurant: &str, cents: i64, qty: u32) -> LineItem {
        LineItem::new(
            ItemId::new(id),
            RestaurantId::new(restaurant),
            format!("item {id}"),
            Decimal::new(cents, 2),
            NonZeroU32::new(qty).unwrap(),
        )
    }

    fn cart() -> Cart {
        let mut cart = Cart::default();
        cart.add(line("101", "1", 1299, 1)).unwrap();
        cart.add(line("301", "1", 1399, 2).with_instructions("Extra cheese please"))
            .unwrap();
        cart
    }

    #[test]
    fn test_add_merges_same_item() {
        let mut cart = cart();
        cart.add(line("101", "1", 1299, 3)).unwrap();

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.item(&ItemId::new("101")).unwrap().quantity.get(), 4);
        assert_eq!(cart.items()[0].id, ItemId::new("101"));
        assert_eq!(cart.item_count(), 6);
    }

    #[test]
    fn test_add_rejects_other_restaurant() {
        let mut cart = cart();
        let before = cart.clone();

        let err = cart.add(line("900", "2", 500, 1)).unwrap_err();
        assert_eq!(
            err,
            CheckoutError::RestaurantMismatch {
                cart: RestaurantId::new("1"),
                item: RestaurantId::new("2"),
            }
        );
        assert_eq!(cart, before);
    }

    #[test]
    fn test_set_quantity_keeps_position_and_instructions() {
        let mut cart = cart();
        cart.set_quantity(&ItemId::new("301"), 5);

        let updated = &cart.items()[1];
        assert_eq!(updated.id, ItemId::new("301"));
        assert_eq!(updated.quantity.get(), 5);
        assert_eq!(updated.special_instructions, "Extra cheese please");
    }

    #[test]
    fn test_set_quantity_below_one_removes() {
        for requested in [0, -1, i64::MIN] {
            let mut via_quantity = cart();
            via_quantity.set_quantity(&ItemId::new("301"), requested);

            let mut via_remove = cart();
            via_remove.remove(&ItemId::new("301"));

            assert_eq!(via_quantity, via_remove);
        }
    }

    #[test]
    fn test_set_quantity_saturates() {
        let mut cart = cart();
        cart.set_quantity(&ItemId::new("101"), i64::MAX);
        assert_eq!(cart.item(&ItemId::new("101")).unwrap().quantity.get(), u32::MAX);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut cart = cart();
        let before = cart.clone();

        assert!(cart.remove(&ItemId::new("nope")).is_none());
        cart.set_quantity(&ItemId::new("nope"), 3);
        cart.set_special_instructions(&ItemId::new("nope"), "x");

        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear_drops_items_and_note() {
        let mut cart = cart();
        cart.set_order_note("Ring the bell");
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.order_note(), "");
        assert_eq!(cart.restaurant_id(), None);
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line("301", "1", 1399, 2).line_total(), Decimal::new(2798, 2));
    }
}
