//! Per-browser store object.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

use inkzaar_core::{OrderId, Rupees};

use super::auth::{AuthEvent, AuthStore};
use super::cart::{CartChange, CartEvent, CartStore};
use super::lock;
use super::observers::Subscription;
use crate::error::{add_breadcrumb, clear_sentry_user, set_sentry_user};
use crate::models::ShopperId;
use crate::services::{OrderConfirmation, ShippingDetails};

/// An order placed during this session, shown first on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedOrder {
    pub id: OrderId,
    pub product: String,
    pub placed_at: DateTime<Utc>,
    pub total: Rupees,
    pub item_count: u64,
}

impl From<&OrderConfirmation> for PlacedOrder {
    fn from(confirmation: &OrderConfirmation) -> Self {
        let product = match confirmation.product_names.as_slice() {
            [] => String::new(),
            [only] => only.clone(),
            [first, rest @ ..] => format!("{first} + {} more", rest.len()),
        };
        Self {
            id: confirmation.order_id.clone(),
            product,
            placed_at: confirmation.placed_at,
            total: confirmation.total(),
            item_count: confirmation.item_count,
        }
    }
}

/// One cart and one auth store, owned together.
///
/// Created on a browser's first request and dropped when the registry
/// evicts it.
#[derive(Debug)]
pub struct ShopperSession {
    id: ShopperId,
    cart: CartStore,
    auth: AuthStore,
    orders: Mutex<Vec<PlacedOrder>>,
    saved_shipping: Mutex<Option<ShippingDetails>>,
    _telemetry: Vec<Subscription>,
}

impl ShopperSession {
    /// A session with no observers attached.
    #[must_use]
    pub fn new(id: ShopperId) -> Self {
        Self {
            id,
            cart: CartStore::new(),
            auth: AuthStore::new(),
            orders: Mutex::new(Vec::new()),
            saved_shipping: Mutex::new(None),
            _telemetry: Vec::new(),
        }
    }

    /// A session whose changes are reported to tracing and Sentry.
    #[must_use]
    pub fn with_telemetry(id: ShopperId) -> Self {
        let cart = CartStore::new();
        let auth = AuthStore::new();
        let telemetry = vec![
            cart.subscribe(move |event: &CartEvent| report_cart_change(id, event)),
            auth.subscribe(move |event: &AuthEvent| report_auth_change(id, event)),
        ];
        Self {
            id,
            cart,
            auth,
            orders: Mutex::new(Vec::new()),
            saved_shipping: Mutex::new(None),
            _telemetry: telemetry,
        }
    }

    #[must_use]
    pub const fn id(&self) -> ShopperId {
        self.id
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    #[must_use]
    pub const fn auth(&self) -> &AuthStore {
        &self.auth
    }

    /// Record a completed checkout.
    pub fn record_order(&self, confirmation: &OrderConfirmation) {
        lock(&self.orders).push(PlacedOrder::from(confirmation));
    }

    /// Orders placed in this session, newest first.
    #[must_use]
    pub fn orders(&self) -> Vec<PlacedOrder> {
        lock(&self.orders).iter().rev().cloned().collect()
    }

    /// Remember shipping details for the next checkout, or forget them.
    pub fn set_saved_shipping(&self, details: Option<ShippingDetails>) {
        *lock(&self.saved_shipping) = details;
    }

    /// Shipping details saved at a previous checkout.
    #[must_use]
    pub fn saved_shipping(&self) -> Option<ShippingDetails> {
        lock(&self.saved_shipping).clone()
    }
}

fn report_cart_change(shopper: ShopperId, event: &CartEvent) {
    let (message, id) = match &event.change {
        CartChange::Added { id, .. } => ("Added to cart", Some(id.as_str())),
        CartChange::QuantityChanged { id, .. } => ("Changed quantity", Some(id.as_str())),
        CartChange::Removed { id } => ("Removed from cart", Some(id.as_str())),
        CartChange::Cleared => ("Cleared cart", None),
        CartChange::CheckedOut => ("Checked out", None),
    };
    tracing::debug!(
        %shopper,
        change = ?event.change,
        total_items = event.snapshot.total_items,
        total_price = event.snapshot.total_price.get(),
        "cart changed"
    );
    match id {
        Some(id) => add_breadcrumb("cart", message, Some(&[("product_id", id)])),
        None => add_breadcrumb("cart", message, None),
    }
}

fn report_auth_change(shopper: ShopperId, event: &AuthEvent) {
    match event {
        AuthEvent::SignedIn(user) => {
            tracing::info!(%shopper, role = %user.role, "user signed in");
            set_sentry_user(&shopper, Some(user.email.as_str()));
        }
        AuthEvent::SignedOut(_) => {
            tracing::info!(%shopper, "user signed out");
            clear_sentry_user();
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use secrecy::SecretString;

    use inkzaar_core::{ProductId, Role};

    use super::*;
    use crate::services::MockAuthService;
    use crate::store::{NewCartItem, OrderSummary};

    fn item(id: &str) -> NewCartItem {
        NewCartItem {
            id: ProductId::new(id),
            name: format!("Item {id}"),
            price: Rupees::new(100),
            image: String::new(),
        }
    }

    #[tokio::test]
    async fn test_cart_and_auth_are_independent() {
        let session = ShopperSession::with_telemetry(ShopperId::generate());
        session.cart().add_to_cart(item("1"));

        let service = MockAuthService::new(Duration::ZERO);
        session
            .auth()
            .login(
                &service,
                "user@demo.com",
                SecretString::from("pw".to_owned()),
                Role::User,
            )
            .await
            .unwrap();
        session.auth().logout();

        assert_eq!(session.cart().total_items(), 1);
        assert!(!session.auth().is_authenticated());
    }

    #[test]
    fn test_orders_listed_newest_first() {
        let session = ShopperSession::new(ShopperId::generate());
        for (n, names) in [vec!["Cards"], vec!["Banner", "Keychains", "Standee"]]
            .into_iter()
            .enumerate()
        {
            session.record_order(&OrderConfirmation {
                order_id: OrderId::new(format!("INK-{n}")),
                placed_at: Utc::now(),
                summary: OrderSummary::for_subtotal(Rupees::new(100)),
                item_count: names.len() as u64,
                product_names: names.into_iter().map(String::from).collect(),
            });
        }

        let orders = session.orders();
        assert_eq!(orders.len(), 2);
        let products: Vec<_> = orders.iter().map(|o| o.product.as_str()).collect();
        assert_eq!(products, vec!["Banner + 2 more", "Cards"]);
        assert_eq!(orders.last().map(|o| o.total), Some(Rupees::new(118)));
    }
}
