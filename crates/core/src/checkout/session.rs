//! The checkout session controller.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{
    AddressDirectory, Cart, CheckoutError, CheckoutStep, LineItem, OrderSubmission,
    PaymentMethod, PricingSummary, SubmissionSink,
};
use crate::types::{AddressId, ItemId};

/// Choices made while stepping through checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSelection {
    /// Weak reference into the address directory.
    pub selected_address_id: Option<AddressId>,
    pub payment_method: PaymentMethod,
    pub step: CheckoutStep,
}

/// What the checkout page should render.
///
/// An empty cart overrides the wizard regardless of the stored step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum CheckoutView {
    EmptyCart,
    Wizard(WizardView),
}

/// The wizard's state for a non-empty cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardView {
    pub step: CheckoutStep,
    pub step_number: u8,
    pub items: Vec<LineItem>,
    pub item_count: u64,
    pub order_note: String,
    pub summary: PricingSummary,
    pub selected_address_id: Option<AddressId>,
    pub payment_method: PaymentMethod,
    /// Whether the "continue" action is enabled at the current step.
    pub can_advance: bool,
}

/// One customer's checkout in progress.
///
/// Serializable so the HTTP layer can keep it in the session store between
/// requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    cart: Cart,
    selection: CheckoutSelection,
}

impl CheckoutSession {
    /// Start checkout with the items picked elsewhere. The directory's default
    /// address, if there is one, is preselected.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::RestaurantMismatch`] if the items come from
    /// more than one restaurant.
    pub fn new<D>(
        items: impl IntoIterator<Item = LineItem>,
        directory: &D,
    ) -> Result<Self, CheckoutError>
    where
        D: AddressDirectory + ?Sized,
    {
        let mut cart = Cart::default();
        for line in items {
            cart.add(line)?;
        }

        Ok(Self {
            cart,
            selection: CheckoutSelection {
                selected_address_id: directory.default_address().map(|a| a.id.clone()),
                ..CheckoutSelection::default()
            },
        })
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn selection(&self) -> &CheckoutSelection {
        &self.selection
    }

    #[must_use]
    pub const fn step(&self) -> CheckoutStep {
        self.selection.step
    }

    // =========================================================================
    // Cart mutations
    // =========================================================================

    /// Add a menu item, merging with an existing line of the same id.
    ///
    /// Refilling an empty cart restarts the wizard at the cart step.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::RestaurantMismatch`] for an item from another
    /// restaurant.
    pub fn add_item(&mut self, line: LineItem) -> Result<(), CheckoutError> {
        let was_empty = self.cart.is_empty();
        self.cart.add(line)?;
        if was_empty {
            self.selection.step = CheckoutStep::Cart;
        }
        Ok(())
    }

    /// Set a line's quantity. Below 1 removes the line; unknown ids are a
    /// no-op.
    pub fn set_quantity(&mut self, item_id: &ItemId, new_quantity: i64) {
        self.cart.set_quantity(item_id, new_quantity);
    }

    /// Remove a line. Unknown ids are a no-op.
    pub fn remove_item(&mut self, item_id: &ItemId) {
        self.cart.remove(item_id);
    }

    pub fn set_special_instructions(&mut self, item_id: &ItemId, text: impl Into<String>) {
        self.cart.set_special_instructions(item_id, text);
    }

    pub fn set_order_note(&mut self, text: impl Into<String>) {
        self.cart.set_order_note(text);
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Record the delivery address. Existence is checked at submission.
    pub fn select_address(&mut self, address_id: AddressId) {
        self.selection.selected_address_id = Some(address_id);
    }

    pub fn select_payment_method(&mut self, method: PaymentMethod) {
        self.selection.payment_method = method;
    }

    /// Whether `advance_step` would move forward from the current step.
    #[must_use]
    pub const fn can_advance(&self) -> bool {
        match self.selection.step {
            CheckoutStep::Cart => true,
            CheckoutStep::Delivery => self.selection.selected_address_id.is_some(),
            CheckoutStep::Payment => false,
        }
    }

    /// Move to the next step and return the step now current.
    ///
    /// At payment this is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::AddressRequired`] when leaving delivery with no
    /// address selected.
    pub fn advance_step(&mut self) -> Result<CheckoutStep, CheckoutError> {
        let current = self.selection.step;
        if current == CheckoutStep::Delivery && self.selection.selected_address_id.is_none() {
            return Err(CheckoutError::AddressRequired);
        }
        if let Some(next) = current.next() {
            self.selection.step = next;
        }
        Ok(self.selection.step)
    }

    /// Move to the previous step and return it. `None` at the cart step: the
    /// caller leaves checkout and goes back to browsing.
    pub fn retreat_step(&mut self) -> Option<CheckoutStep> {
        let previous = self.selection.step.previous()?;
        self.selection.step = previous;
        Some(previous)
    }

    // =========================================================================
    // Derived state
    // =========================================================================

    #[must_use]
    pub fn summary(&self) -> PricingSummary {
        PricingSummary::for_items(self.cart.items())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    #[must_use]
    pub fn view(&self) -> CheckoutView {
        if self.cart.is_empty() {
            return CheckoutView::EmptyCart;
        }

        CheckoutView::Wizard(WizardView {
            step: self.selection.step,
            step_number: self.selection.step.number(),
            items: self.cart.items().to_vec(),
            item_count: self.cart.item_count(),
            order_note: self.cart.order_note().to_owned(),
            summary: self.summary(),
            selected_address_id: self.selection.selected_address_id.clone(),
            payment_method: self.selection.payment_method,
            can_advance: self.can_advance(),
        })
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Assemble the order and hand it to `sink`.
    ///
    /// On acceptance the cart and note are cleared, the step goes back to
    /// cart, and the submitted order is returned. Address and payment choices
    /// are kept for the next order. On any error nothing changes.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::WrongStep`] unless at the payment step
    /// - [`CheckoutError::EmptyCart`] with nothing to order
    /// - [`CheckoutError::AddressRequired`] with no address selected
    /// - [`CheckoutError::AddressNotFound`] if the directory lacks the address
    /// - [`CheckoutError::SubmissionRejected`] if the sink declines
    pub async fn submit<D, S>(
        &mut self,
        directory: &D,
        sink: &S,
    ) -> Result<OrderSubmission, CheckoutError>
    where
        D: AddressDirectory + ?Sized,
        S: SubmissionSink + ?Sized,
    {
        let order = self.prepare_order(directory)?;
        sink.submit(&order).await?;

        self.cart.clear();
        self.selection.step = CheckoutStep::Cart;
        Ok(order)
    }

    fn prepare_order<D>(&self, directory: &D) -> Result<OrderSubmission, CheckoutError>
    where
        D: AddressDirectory + ?Sized,
    {
        if self.selection.step != CheckoutStep::Payment {
            return Err(CheckoutError::WrongStep {
                current: self.selection.step,
            });
        }
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let address_id = self
            .selection
            .selected_address_id
            .as_ref()
            .ok_or(CheckoutError::AddressRequired)?;
        let address = directory
            .find(address_id)
            .ok_or_else(|| CheckoutError::AddressNotFound(address_id.clone()))?;

        Ok(OrderSubmission {
            line_items: self.cart.items().to_vec(),
            address: address.clone(),
            payment_method: self.selection.payment_method,
            order_note: self.cart.order_note().to_owned(),
            pricing: self.summary(),
            submitted_at: Utc::now(),
        })
    }
}
