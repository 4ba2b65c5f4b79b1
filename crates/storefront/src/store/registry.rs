//! Shopper sessions keyed by cookie-session shopper ID.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use moka::notification::RemovalCause;

use crate::models::ShopperId;

use super::shopper::ShopperSession;

/// Idle lifetime of a shopper session. Matches the session cookie expiry.
pub const SHOPPER_IDLE_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

const MAX_SHOPPERS: u64 = 10_000;

/// Owns every live [`ShopperSession`].
#[derive(Clone)]
pub struct ShopperRegistry {
    cache: Cache<ShopperId, Arc<ShopperSession>>,
}

impl ShopperRegistry {
    /// Registry with the default idle lifetime and capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(SHOPPER_IDLE_TTL, MAX_SHOPPERS)
    }

    /// Registry with a custom idle lifetime and capacity.
    #[must_use]
    pub fn with_limits(time_to_idle: Duration, max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_idle(time_to_idle)
            .eviction_listener(|id: Arc<ShopperId>, _session, cause: RemovalCause| {
                tracing::debug!(shopper = %id, ?cause, "shopper session torn down");
            })
            .build();
        Self { cache }
    }

    /// The session for `id`, creating it on first use.
    pub async fn get_or_create(&self, id: ShopperId) -> Arc<ShopperSession> {
        self.cache
            .get_with(id, async move {
                tracing::debug!(shopper = %id, "shopper session created");
                Arc::new(ShopperSession::with_telemetry(id))
            })
            .await
    }

    /// The session for `id`, if it is live.
    pub async fn get(&self, id: &ShopperId) -> Option<Arc<ShopperSession>> {
        self.cache.get(id).await
    }

    /// Tear down the session for `id`.
    pub async fn remove(&self, id: &ShopperId) {
        self.cache.invalidate(id).await;
    }

    /// Approximate number of live sessions.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Whether no sessions are live (approximate).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ShopperRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ShopperRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopperRegistry")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}
