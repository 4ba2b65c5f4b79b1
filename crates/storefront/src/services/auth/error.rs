//! Authentication error types.

use thiserror::Error;

use inkzaar_core::EmailError;

/// Credentials rejected before reaching the service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Email field was empty.
    #[error("email is required")]
    MissingEmail,

    /// Password field was empty.
    #[error("password is required")]
    MissingPassword,

    /// Email did not look like an address.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// Errors that can occur during sign-in.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Caller input was rejected. Not retryable.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The authentication backend could not be reached.
    #[error("authentication service unavailable: {0}")]
    Unavailable(String),
}

impl AuthError {
    /// Whether retrying the same request could succeed.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}
