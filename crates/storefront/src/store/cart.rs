//! Cart state holder.

use std::sync::Mutex;

use serde::Serialize;

use inkzaar_core::{ProductId, Rupees};

use super::lock;
use super::observers::{Observers, Subscription};

/// Product data needed to put something in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    pub id: ProductId,
    pub name: String,
    pub price: Rupees,
    pub image: String,
}

/// One product line in the cart. `quantity` is never zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    pub price: Rupees,
    pub image: String,
    pub quantity: u32,
}

impl CartItem {
    /// `price × quantity`.
    #[must_use]
    pub const fn line_total(&self) -> Rupees {
        self.price.times(self.quantity)
    }
}

/// Order totals shown on the cart and checkout pages.
///
/// Shipping is free; GST is charged on the subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub subtotal: Rupees,
    pub shipping: Rupees,
    pub tax: Rupees,
    pub total: Rupees,
}

impl OrderSummary {
    /// Totals for a given subtotal.
    #[must_use]
    pub fn for_subtotal(subtotal: Rupees) -> Self {
        let shipping = Rupees::ZERO;
        let tax = subtotal.gst();
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

/// A consistent read of the cart: its lines and both aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
    pub total_items: u64,
    pub total_price: Rupees,
}

impl CartSnapshot {
    fn of(items: &[CartItem]) -> Self {
        Self {
            items: items.to_vec(),
            total_items: total_items(items),
            total_price: total_price(items),
        }
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Subtotal, shipping, GST and grand total.
    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::for_subtotal(self.total_price)
    }
}

/// What a mutation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    /// A line was created or its quantity incremented by an add.
    Added { id: ProductId, quantity: u32 },
    /// A line's quantity was set directly.
    QuantityChanged { id: ProductId, quantity: u32 },
    /// A line was removed.
    Removed { id: ProductId },
    /// All lines were removed.
    Cleared,
    /// The units of a placed order were taken out of the cart.
    CheckedOut,
}

/// Delivered to cart observers after a mutation is committed.
#[derive(Debug, Clone)]
pub struct CartEvent {
    pub change: CartChange,
    pub snapshot: CartSnapshot,
}

/// Ordered, observable collection of cart lines keyed by product ID.
///
/// Operations on an ID that is not in the cart are no-ops, and no-ops do
/// not notify observers.
#[derive(Debug, Default)]
pub struct CartStore {
    items: Mutex<Vec<CartItem>>,
    observers: Observers<CartEvent>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product and return the line's new quantity.
    pub fn add_to_cart(&self, item: NewCartItem) -> u32 {
        let mut quantity = 1;
        self.commit(|items| {
            if let Some(line) = items.iter_mut().find(|line| line.id == item.id) {
                line.quantity = line.quantity.saturating_add(1);
                quantity = line.quantity;
            } else {
                items.push(CartItem {
                    id: item.id.clone(),
                    name: item.name,
                    price: item.price,
                    image: item.image,
                    quantity: 1,
                });
            }
            Some(CartChange::Added {
                id: item.id,
                quantity,
            })
        });
        quantity
    }

    /// Remove the line for `id`, if present.
    pub fn remove_from_cart(&self, id: &ProductId) {
        self.commit(|items| {
            let before = items.len();
            items.retain(|line| &line.id != id);
            (items.len() != before).then(|| CartChange::Removed { id: id.clone() })
        });
    }

    /// Set the quantity of the line for `id`.
    ///
    /// A quantity of zero or less removes the line. Quantities above
    /// `u32::MAX` saturate.
    pub fn update_quantity(&self, id: &ProductId, new_quantity: i64) {
        if new_quantity <= 0 {
            self.remove_from_cart(id);
            return;
        }
        let quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);

        self.commit(|items| {
            let line = items.iter_mut().find(|line| &line.id == id)?;
            if line.quantity == quantity {
                return None;
            }
            line.quantity = quantity;
            Some(CartChange::QuantityChanged {
                id: id.clone(),
                quantity,
            })
        });
    }

    /// Remove every line.
    pub fn clear_cart(&self) {
        self.commit(|items| {
            if items.is_empty() {
                return None;
            }
            items.clear();
            Some(CartChange::Cleared)
        });
    }

    /// Take the units of a placed order out of the cart.
    ///
    /// Each ordered line's quantity is subtracted from the matching line and
    /// lines that reach zero are removed. Anything added after `ordered` was
    /// taken stays in the cart.
    pub fn remove_ordered(&self, ordered: &CartSnapshot) {
        self.commit(|items| {
            let mut changed = false;
            for placed in &ordered.items {
                if let Some(line) = items.iter_mut().find(|line| line.id == placed.id) {
                    line.quantity = line.quantity.saturating_sub(placed.quantity);
                    changed = true;
                }
            }
            items.retain(|line| line.quantity > 0);
            changed.then_some(CartChange::CheckedOut)
        });
    }

    /// The lines, in the order they were first added.
    #[must_use]
    pub fn items(&self) -> Vec<CartItem> {
        lock(&self.items).clone()
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        total_items(&lock(&self.items))
    }

    /// Sum of `price × quantity` over all lines.
    #[must_use]
    pub fn total_price(&self) -> Rupees {
        total_price(&lock(&self.items))
    }

    /// Lines and aggregates read under one lock.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::of(&lock(&self.items))
    }

    /// Observe committed changes.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&CartEvent) + Send + Sync + 'static,
    {
        self.observers.subscribe(callback)
    }

    /// Apply `mutate` under the lock, then notify outside it.
    fn commit<F>(&self, mutate: F)
    where
        F: FnOnce(&mut Vec<CartItem>) -> Option<CartChange>,
    {
        let event = {
            let mut items = lock(&self.items);
            mutate(&mut items).map(|change| CartEvent {
                change,
                snapshot: CartSnapshot::of(&items),
            })
        };

        if let Some(event) = event {
            self.observers.notify(&event);
        }
    }
}

fn total_items(items: &[CartItem]) -> u64 {
    items.iter().map(|line| u64::from(line.quantity)).sum()
}

fn total_price(items: &[CartItem]) -> Rupees {
    items.iter().map(CartItem::line_total).sum()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn product(id: &str, price: u64) -> NewCartItem {
        NewCartItem {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Rupees::new(price),
            image: "/placeholder.svg".to_string(),
        }
    }

    fn recorder(cart: &CartStore) -> (Arc<Mutex<Vec<CartEvent>>>, Subscription) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let subscription = cart.subscribe(move |event| lock(&sink).push(event.clone()));
        (events, subscription)
    }

    #[test]
    fn test_adding_same_product_twice_increments_quantity() {
        let cart = CartStore::new();
        cart.add_to_cart(product("1", 299));
        let quantity = cart.add_to_cart(product("1", 299));

        let items = cart.items();
        assert_eq!(items.len(), 1);
        assert_eq!(quantity, 2);
        assert_eq!(items.first().map(|line| line.quantity), Some(2));
        assert_eq!(cart.total_price(), Rupees::new(598));
    }

    #[test]
    fn test_one_line_per_id_with_quantity_equal_to_add_count() {
        let cart = CartStore::new();
        let adds = ["1", "2", "1", "3", "1", "2"];
        for id in adds {
            cart.add_to_cart(product(id, 100));
        }

        let items = cart.items();
        assert_eq!(items.len(), 3);
        for line in &items {
            let expected = adds.iter().filter(|id| **id == line.id.as_str()).count();
            assert_eq!(line.quantity as usize, expected);
        }
        assert_eq!(cart.total_items(), adds.len() as u64);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let cart = CartStore::new();
        cart.add_to_cart(product("3", 10));
        cart.add_to_cart(product("1", 10));
        cart.add_to_cart(product("3", 10));

        let ids: Vec<_> = cart.items().into_iter().map(|line| line.id).collect();
        assert_eq!(ids, vec![ProductId::new("3"), ProductId::new("1")]);
    }

    #[test]
    fn test_remove_leaves_other_lines() {
        let cart = CartStore::new();
        cart.add_to_cart(product("1", 299));
        cart.add_to_cart(product("2", 1499));
        cart.remove_from_cart(&ProductId::new("1"));

        let snapshot = cart.snapshot();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items.first().map(|l| l.id.as_str()), Some("2"));
        assert_eq!(snapshot.total_items, 1);
        assert_eq!(snapshot.total_price, Rupees::new(1499));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let cart = CartStore::new();
        cart.add_to_cart(product("1", 299));
        cart.remove_from_cart(&ProductId::new("1"));
        cart.remove_from_cart(&ProductId::new("1"));
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_update_to_zero_or_negative_removes() {
        let cart = CartStore::new();
        cart.add_to_cart(product("1", 299));
        cart.add_to_cart(product("2", 499));

        cart.update_quantity(&ProductId::new("1"), 0);
        cart.update_quantity(&ProductId::new("2"), -5);

        assert!(cart.items().is_empty());
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn test_update_sets_quantity_without_upper_bound() {
        let cart = CartStore::new();
        cart.add_to_cart(product("1", 199));
        cart.update_quantity(&ProductId::new("1"), 250);

        assert_eq!(cart.total_items(), 250);
        assert_eq!(cart.total_price(), Rupees::new(199 * 250));

        cart.update_quantity(&ProductId::new("1"), i64::MAX);
        assert_eq!(cart.total_items(), u64::from(u32::MAX));
    }

    #[test]
    fn test_update_absent_id_is_noop() {
        let cart = CartStore::new();
        cart.add_to_cart(product("1", 199));
        cart.update_quantity(&ProductId::new("9"), 4);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_remove_ordered_keeps_later_additions() {
        let cart = CartStore::new();
        cart.add_to_cart(product("1", 299));
        cart.add_to_cart(product("1", 299));
        let ordered = cart.snapshot();

        cart.add_to_cart(product("1", 299));
        cart.add_to_cart(product("2", 1499));
        cart.remove_ordered(&ordered);

        let items = cart.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items.first().map(|line| line.quantity), Some(1));
        assert_eq!(cart.total_price(), Rupees::new(299 + 1499));
    }

    #[test]
    fn test_remove_ordered_drops_lines_reduced_below_order() {
        let cart = CartStore::new();
        cart.add_to_cart(product("1", 100));
        cart.add_to_cart(product("1", 100));
        let ordered = cart.snapshot();

        cart.update_quantity(&ProductId::new("1"), 1);
        cart.remove_ordered(&ordered);

        assert!(cart.snapshot().is_empty());
    }

    #[test]
    fn test_clear_zeroes_aggregates() {
        let cart = CartStore::new();
        cart.add_to_cart(product("1", 299));
        cart.add_to_cart(product("6", 2999));
        cart.clear_cart();

        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Rupees::ZERO);
        assert!(cart.snapshot().is_empty());
    }

    #[test]
    fn test_observers_see_committed_state() {
        let cart = CartStore::new();
        let (events, _subscription) = recorder(&cart);

        cart.add_to_cart(product("1", 299));
        cart.add_to_cart(product("1", 299));
        cart.update_quantity(&ProductId::new("1"), 5);
        cart.remove_from_cart(&ProductId::new("1"));

        let events = lock(&events);
        let changes: Vec<_> = events.iter().map(|e| e.change.clone()).collect();
        assert_eq!(
            changes,
            vec![
                CartChange::Added {
                    id: ProductId::new("1"),
                    quantity: 1
                },
                CartChange::Added {
                    id: ProductId::new("1"),
                    quantity: 2
                },
                CartChange::QuantityChanged {
                    id: ProductId::new("1"),
                    quantity: 5
                },
                CartChange::Removed {
                    id: ProductId::new("1")
                },
            ]
        );
        let totals: Vec<_> = events.iter().map(|e| e.snapshot.total_price).collect();
        assert_eq!(
            totals,
            vec![
                Rupees::new(299),
                Rupees::new(598),
                Rupees::new(1495),
                Rupees::ZERO
            ]
        );
    }

    #[test]
    fn test_noops_do_not_notify() {
        let cart = CartStore::new();
        let (events, _subscription) = recorder(&cart);

        cart.remove_from_cart(&ProductId::new("1"));
        cart.update_quantity(&ProductId::new("1"), 3);
        cart.clear_cart();

        assert!(lock(&events).is_empty());
    }

    #[test]
    fn test_observer_can_read_store_during_notification() {
        let cart = Arc::new(CartStore::new());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let reader = Arc::downgrade(&cart);
        let sink = Arc::clone(&seen);
        let _subscription = cart.subscribe(move |_| {
            if let Some(cart) = reader.upgrade() {
                lock(&sink).push(cart.total_items());
            }
        });

        cart.add_to_cart(product("1", 10));
        cart.add_to_cart(product("2", 10));

        assert_eq!(*lock(&seen), vec![1, 2]);
    }

    #[test]
    fn test_summary_adds_gst() {
        let cart = CartStore::new();
        cart.add_to_cart(product("1", 299));
        cart.add_to_cart(product("2", 1499));

        let summary = cart.snapshot().summary();
        assert_eq!(summary.subtotal, Rupees::new(1798));
        assert_eq!(summary.shipping, Rupees::ZERO);
        assert_eq!(summary.tax, Rupees::new(324)); // 323.64
        assert_eq!(summary.total, Rupees::new(2122));
    }
}
