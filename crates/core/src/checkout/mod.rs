//! Checkout: cart, pricing, the three-step wizard and order submission.
//!
//! [`CheckoutSession`] is the controller. It owns the [`Cart`] and the
//! [`CheckoutSelection`] (address, payment method, step) and derives a
//! [`PricingSummary`] on every read. Two collaborators are passed in by the
//! caller rather than owned:
//!
//! - an [`AddressDirectory`] listing the customer's saved addresses
//! - a [`SubmissionSink`] that accepts or rejects the finished order
//!
//! # Flow
//!
//! ```text
//! Cart ──advance──▶ Delivery ──advance (address set)──▶ Payment ──submit──▶ sink
//!  ▲                   │  ▲                               │
//!  └──────retreat──────┘  └────────────retreat────────────┘
//! ```
//!
//! Whatever the step, an empty cart is rendered as [`CheckoutView::EmptyCart`].
//!
//! # Example
//!
//! ```rust
//! use std::num::NonZeroU32;
//!
//! use quickbite_core::checkout::{Address, CheckoutSession, InMemoryAddressBook, LineItem};
//! use quickbite_core::{AddressId, ItemId, RestaurantId};
//! use rust_decimal::Decimal;
//!
//! let book = InMemoryAddressBook::new(vec![Address {
//!     id: AddressId::new("1"),
//!     label: "Home".into(),
//!     address_line1: "123 Main St".into(),
//!     address_line2: None,
//!     city: "New York".into(),
//!     state: "NY".into(),
//!     postal_code: "10001".into(),
//!     is_default: true,
//! }])
//! .unwrap();
//!
//! let pizza = LineItem::new(
//!     ItemId::new("101"),
//!     RestaurantId::new("1"),
//!     "Margherita Pizza",
//!     Decimal::new(1299, 2),
//!     NonZeroU32::MIN,
//! );
//! let mut session = CheckoutSession::new(vec![pizza], &book).unwrap();
//!
//! assert_eq!(session.selection().selected_address_id, Some(AddressId::new("1")));
//! assert_eq!(session.summary().subtotal, Decimal::new(1299, 2));
//!
//! session.set_quantity(&ItemId::new("101"), 0);
//! assert!(session.cart().is_empty());
//! ```

mod address;
mod cart;
mod error;
mod pricing;
mod session;
mod step;
mod submission;

pub use address::{Address, AddressBookError, AddressDirectory, InMemoryAddressBook};
pub use cart::{Cart, LineItem};
pub use error::CheckoutError;
pub use pricing::{DELIVERY_FEE, PricingSummary, TAX_RATE};
pub use session::{CheckoutSelection, CheckoutSession, CheckoutView, WizardView};
pub use step::{CheckoutStep, PaymentMethod};
pub use submission::{OrderSubmission, SubmissionRejected, SubmissionSink};
