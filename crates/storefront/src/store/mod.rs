//! Session-scoped client state.
//!
//! Each browser session owns one [`ShopperSession`]: a cart holder and an
//! auth holder, both observable. Sessions live in the [`ShopperRegistry`],
//! which `AppState` owns; there are no global singletons.
//!
//! # Concurrency
//!
//! Requests from the same browser may run concurrently, so the holders use
//! interior mutability. Locks are held only for a synchronous mutation and
//! never across an `.await`; observers run after the lock is released.

pub mod auth;
pub mod cart;
pub mod observers;
pub mod registry;
pub mod shopper;

use std::sync::{Mutex, MutexGuard, PoisonError};

pub use auth::{AuthEvent, AuthStore};
pub use cart::{CartChange, CartEvent, CartItem, CartSnapshot, CartStore, NewCartItem, OrderSummary};
pub use observers::{Observers, Subscription};
pub use registry::ShopperRegistry;
pub use shopper::{PlacedOrder, ShopperSession};

/// Lock a mutex, recovering the data if a previous holder panicked.
///
/// Every mutation leaves the guarded state consistent before anything that
/// could panic runs, so a poisoned lock still guards valid data.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
