//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::services::{
    AuthService, InquiryService, MockAuthService, MockInquiryService, MockOrderService,
    OrderService,
};
use crate::store::ShopperRegistry;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and owns the shopper registry,
/// the fixture catalog and the service capabilities.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    shoppers: ShopperRegistry,
    auth: Arc<dyn AuthService>,
    orders: Arc<dyn OrderService>,
    inquiries: Arc<dyn InquiryService>,
}

/// Service capabilities the handlers call.
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<dyn AuthService>,
    pub orders: Arc<dyn OrderService>,
    pub inquiries: Arc<dyn InquiryService>,
}

impl Services {
    /// Mock services with the configured delays.
    #[must_use]
    pub fn mock(config: &StorefrontConfig) -> Self {
        Self {
            auth: Arc::new(MockAuthService::new(config.delays.login)),
            orders: Arc::new(MockOrderService::new(config.delays.checkout)),
            inquiries: Arc::new(MockInquiryService::new(config.delays.inquiry)),
        }
    }
}

impl AppState {
    /// Create state backed by the mock services.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let services = Services::mock(&config);
        Self::with_services(config, services)
    }

    /// Create state with explicit service implementations.
    #[must_use]
    pub fn with_services(config: StorefrontConfig, services: Services) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Catalog::seeded(),
                shoppers: ShopperRegistry::new(),
                auth: services.auth,
                orders: services.orders,
                inquiries: services.inquiries,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the fixture catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the live shopper sessions.
    #[must_use]
    pub fn shoppers(&self) -> &ShopperRegistry {
        &self.inner.shoppers
    }

    #[must_use]
    pub fn auth_service(&self) -> &dyn AuthService {
        self.inner.auth.as_ref()
    }

    #[must_use]
    pub fn order_service(&self) -> &dyn OrderService {
        self.inner.orders.as_ref()
    }

    #[must_use]
    pub fn inquiry_service(&self) -> &dyn InquiryService {
        self.inner.inquiries.as_ref()
    }
}
