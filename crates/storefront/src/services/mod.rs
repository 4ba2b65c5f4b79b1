//! Service capabilities behind the state holders and forms.
//!
//! # Services
//!
//! - `auth` - credential check for sign-in
//! - `orders` - checkout order placement
//! - `inquiries` - contact, collaboration and influencer sign-up forms
//!
//! Every capability is an object-safe async trait so handlers hold an
//! `Arc<dyn ...>`. The `Mock*` implementations accept any well-formed input
//! after a configurable delay and can be switched into an unavailable mode.

pub mod auth;
pub mod inquiries;
pub mod orders;

use std::time::Duration;

use thiserror::Error;

pub use auth::{AuthError, AuthService, Credentials, MockAuthService, ValidationError};
pub use inquiries::{
    CollaborationRequest, ContactMessage, InfluencerApplication, Inquiry, InquiryError,
    InquiryReceipt, InquiryService, MockInquiryService,
};
pub use orders::{
    MockOrderService, OrderConfirmation, OrderError, OrderRequest, OrderService, ShippingDetails,
};

/// A required form field was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} is required")]
pub struct MissingField(pub &'static str);

/// Presence check: the field is non-empty after trimming.
///
/// # Errors
///
/// Returns `MissingField(name)` if `value` is blank.
pub fn require(name: &'static str, value: &str) -> Result<(), MissingField> {
    if value.trim().is_empty() {
        Err(MissingField(name))
    } else {
        Ok(())
    }
}

/// Simulated remote round trip shared by the mock services.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Simulation {
    delay: Duration,
    available: bool,
}

impl Simulation {
    pub(crate) const fn new(delay: Duration) -> Self {
        Self {
            delay,
            available: true,
        }
    }

    pub(crate) const fn unavailable(self) -> Self {
        Self {
            available: false,
            ..self
        }
    }

    /// Wait out the configured delay and report whether the "remote" is up.
    pub(crate) async fn round_trip(&self) -> bool {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_blank() {
        assert_eq!(require("email", "  "), Err(MissingField("email")));
        assert_eq!(require("email", "a@b.c"), Ok(()));
        assert_eq!(MissingField("city").to_string(), "city is required");
    }

    #[tokio::test(start_paused = true)]
    async fn test_round_trip_waits_for_delay() {
        let sim = Simulation::new(Duration::from_millis(1500));
        let start = tokio::time::Instant::now();
        assert!(sim.round_trip().await);
        assert!(start.elapsed() >= Duration::from_millis(1500));
        assert!(!sim.unavailable().round_trip().await);
    }
}
