//! Authentication service.
//!
//! Checks a credential pair and returns the signed-in [`User`]. The only
//! implementation is [`MockAuthService`], which accepts any well-formed
//! pair; there is no real authentication on this site.

mod error;

pub use error::{AuthError, ValidationError};

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tracing::instrument;

use inkzaar_core::{Email, Role};

use super::Simulation;
use crate::models::User;

/// A validated sign-in attempt.
pub struct Credentials {
    pub email: Email,
    pub password: SecretString,
    pub role: Role,
}

impl Credentials {
    /// Presence and shape checks on raw form input.
    ///
    /// # Errors
    ///
    /// Returns `MissingEmail` or `MissingPassword` for blank fields and
    /// `InvalidEmail` for a malformed address.
    pub fn parse(email: &str, password: SecretString, role: Role) -> Result<Self, ValidationError> {
        if email.trim().is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if password.expose_secret().is_empty() {
            return Err(ValidationError::MissingPassword);
        }
        let email = Email::parse(email)?;
        Ok(Self {
            email,
            password,
            role,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

/// Checks credentials and resolves the user they belong to.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Authenticate a validated credential pair.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unavailable` if the backend cannot be reached.
    async fn authenticate(&self, credentials: &Credentials) -> Result<User, AuthError>;
}

/// Demo sign-in: any well-formed pair succeeds after a delay.
#[derive(Debug, Clone, Copy)]
pub struct MockAuthService {
    sim: Simulation,
}

impl MockAuthService {
    /// Succeed after `delay`.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            sim: Simulation::new(delay),
        }
    }

    /// Fail every request with `AuthError::Unavailable`.
    #[must_use]
    pub const fn unavailable(self) -> Self {
        Self {
            sim: self.sim.unavailable(),
        }
    }
}

#[async_trait]
impl AuthService for MockAuthService {
    #[instrument(
        skip(self, credentials),
        fields(email = %credentials.email, role = %credentials.role)
    )]
    async fn authenticate(&self, credentials: &Credentials) -> Result<User, AuthError> {
        if !self.sim.round_trip().await {
            return Err(AuthError::Unavailable("mock set unavailable".to_owned()));
        }
        Ok(User::from_email(credentials.email.clone(), credentials.role))
    }
}
