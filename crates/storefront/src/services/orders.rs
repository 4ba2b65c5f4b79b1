//! Order placement for checkout.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::instrument;
use uuid::Uuid;

use inkzaar_core::{OrderId, PaymentMethod, Rupees};

use super::{MissingField, Simulation, require};
use crate::store::{CartSnapshot, OrderSummary};

/// Errors that can occur when placing an order.
#[derive(Debug, Error)]
pub enum OrderError {
    /// A required checkout field was blank.
    #[error(transparent)]
    Validation(#[from] MissingField),

    /// Nothing to order.
    #[error("cart is empty")]
    EmptyCart,

    /// The order backend could not be reached.
    #[error("order service unavailable: {0}")]
    Unavailable(String),
}

impl OrderError {
    /// Whether the error came from caller input.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::EmptyCart)
    }
}

/// Delivery address and contact details from the checkout form.
#[derive(Debug, Clone, Default)]
pub struct ShippingDetails {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
}

impl ShippingDetails {
    /// Presence checks, in form order.
    ///
    /// # Errors
    ///
    /// Returns the first blank field.
    pub fn validate(&self) -> Result<(), MissingField> {
        require("email", &self.email)?;
        require("first name", &self.first_name)?;
        require("last name", &self.last_name)?;
        require("address", &self.address)?;
        require("city", &self.city)?;
        require("state", &self.state)?;
        require("ZIP code", &self.zip_code)?;
        require("phone", &self.phone)
    }
}

/// Everything needed to place an order.
#[derive(Debug, Clone)]
pub struct OrderRequest {
    pub shipping: ShippingDetails,
    pub payment: PaymentMethod,
    pub cart: CartSnapshot,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub placed_at: DateTime<Utc>,
    pub summary: OrderSummary,
    pub item_count: u64,
    /// Product names, in cart order.
    pub product_names: Vec<String>,
}

impl OrderConfirmation {
    /// Grand total charged.
    #[must_use]
    pub const fn total(&self) -> Rupees {
        self.summary.total
    }
}

/// Places orders.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Place an order for the cart contents.
    ///
    /// # Errors
    ///
    /// Returns `Validation`/`EmptyCart` for bad input and `Unavailable` if
    /// the backend cannot be reached.
    async fn place_order(&self, request: &OrderRequest) -> Result<OrderConfirmation, OrderError>;
}

/// Accepts every valid order after a delay.
#[derive(Debug, Clone, Copy)]
pub struct MockOrderService {
    sim: Simulation,
}

impl MockOrderService {
    /// Succeed after `delay`.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            sim: Simulation::new(delay),
        }
    }

    /// Fail every valid request with `OrderError::Unavailable`.
    #[must_use]
    pub const fn unavailable(self) -> Self {
        Self {
            sim: self.sim.unavailable(),
        }
    }
}

#[async_trait]
impl OrderService for MockOrderService {
    #[instrument(
        skip(self, request),
        fields(items = request.cart.total_items, payment = request.payment.as_str())
    )]
    async fn place_order(&self, request: &OrderRequest) -> Result<OrderConfirmation, OrderError> {
        request.shipping.validate()?;
        if request.cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        if !self.sim.round_trip().await {
            return Err(OrderError::Unavailable("mock set unavailable".to_owned()));
        }

        Ok(OrderConfirmation {
            order_id: new_order_id(),
            placed_at: Utc::now(),
            summary: request.cart.summary(),
            item_count: request.cart.total_items,
            product_names: request.cart.items.iter().map(|i| i.name.clone()).collect(),
        })
    }
}

/// `INK-` followed by eight uppercase hex digits.
fn new_order_id() -> OrderId {
    let simple = Uuid::new_v4().simple().to_string();
    let short: String = simple.chars().take(8).collect();
    OrderId::new(format!("INK-{}", short.to_uppercase()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use inkzaar_core::ProductId;

    use super::*;
    use crate::store::{CartStore, NewCartItem};

    fn shipping() -> ShippingDetails {
        ShippingDetails {
            email: "user@demo.com".into(),
            first_name: "Asha".into(),
            last_name: "Rao".into(),
            address: "12 MG Road".into(),
            city: "Mumbai".into(),
            state: "Maharashtra".into(),
            zip_code: "400001".into(),
            phone: "+91 98765 43210".into(),
        }
    }

    fn cart() -> CartSnapshot {
        let cart = CartStore::new();
        cart.add_to_cart(NewCartItem {
            id: ProductId::new("1"),
            name: "Premium Business Cards".into(),
            price: Rupees::new(299),
            image: String::new(),
        });
        cart.snapshot()
    }

    fn request(cart: CartSnapshot) -> OrderRequest {
        OrderRequest {
            shipping: shipping(),
            payment: PaymentMethod::Upi,
            cart,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_places_order_with_totals() {
        let service = MockOrderService::new(Duration::from_millis(2000));
        let confirmation = service.place_order(&request(cart())).await.unwrap();

        assert!(confirmation.order_id.as_str().starts_with("INK-"));
        assert_eq!(confirmation.order_id.as_str().len(), 12);
        assert_eq!(confirmation.item_count, 1);
        assert_eq!(confirmation.total(), Rupees::new(353));
        assert_eq!(confirmation.product_names, vec!["Premium Business Cards"]);
    }

    #[tokio::test]
    async fn test_rejects_missing_field() {
        let service = MockOrderService::new(Duration::ZERO);
        let mut req = request(cart());
        req.shipping.city = "   ".into();

        let err = service.place_order(&req).await.unwrap_err();
        assert!(matches!(err, OrderError::Validation(MissingField("city"))));
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_rejects_empty_cart() {
        let service = MockOrderService::new(Duration::ZERO);
        let err = service
            .place_order(&request(CartSnapshot::default()))
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::EmptyCart));
    }

    #[tokio::test]
    async fn test_unavailable_mock() {
        let service = MockOrderService::new(Duration::ZERO).unavailable();
        let err = service.place_order(&request(cart())).await.unwrap_err();
        assert!(matches!(err, OrderError::Unavailable(_)));
        assert!(!err.is_validation());
    }
}
