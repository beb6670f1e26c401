//! Application state shared across handlers.

use std::sync::Arc;

use quickbite_core::catalog::Catalog;
use quickbite_core::checkout::{AddressBookError, InMemoryAddressBook};

use crate::config::StorefrontConfig;
use crate::services::auth::DemoAuthService;
use crate::services::catalog::{demo_address_book, demo_catalog};
use crate::services::orders::{InFlightOrders, OrderDesk, TimeoutSink};

/// The sink orders are submitted to.
pub type OrderSink = TimeoutSink<OrderDesk>;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// configuration and the catalog, address, order, and auth services.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Arc<Catalog>,
    addresses: InMemoryAddressBook,
    orders: OrderSink,
    in_flight: InFlightOrders,
    auth: DemoAuthService,
}

impl AppState {
    /// Create application state from explicit parts.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog, addresses: InMemoryAddressBook) -> Self {
        let catalog = Arc::new(catalog);
        let orders = TimeoutSink::new(OrderDesk::new(Arc::clone(&catalog)), config.submit_timeout);
        let auth = DemoAuthService::new(config.demo_account.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                addresses,
                orders,
                in_flight: InFlightOrders::default(),
                auth,
            }),
        }
    }

    /// Create application state with the built-in catalog and address book.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in address book is inconsistent.
    pub fn with_demo_data(config: StorefrontConfig) -> Result<Self, AddressBookError> {
        Ok(Self::new(config, demo_catalog(), demo_address_book()?))
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// The customer's saved delivery addresses.
    #[must_use]
    pub fn addresses(&self) -> &InMemoryAddressBook {
        &self.inner.addresses
    }

    /// Where checkout sends placed orders.
    #[must_use]
    pub fn orders(&self) -> &OrderSink {
        &self.inner.orders
    }

    /// Sessions with a submission running.
    #[must_use]
    pub fn in_flight(&self) -> &InFlightOrders {
        &self.inner.in_flight
    }

    #[must_use]
    pub fn auth(&self) -> &DemoAuthService {
        &self.inner.auth
    }
}
