//! Auth state holder.

use std::sync::Mutex;

use secrecy::SecretString;
use tracing::instrument;

use inkzaar_core::Role;

use super::lock;
use super::observers::{Observers, Subscription};
use crate::models::User;
use crate::services::{AuthError, AuthService, Credentials};

/// Delivered to auth observers after the current user changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// A user signed in, replacing any previous one.
    SignedIn(User),
    /// The given user signed out.
    SignedOut(User),
}

/// Holds at most one signed-in user.
#[derive(Debug, Default)]
pub struct AuthStore {
    current: Mutex<Option<User>>,
    observers: Observers<AuthEvent>,
}

impl AuthStore {
    /// Create an anonymous store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign in through `service`.
    ///
    /// Credentials are checked before the service is called. The lock is not
    /// held across the service call, and nothing changes on failure.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Validation` for blank or malformed input and
    /// whatever the service reports otherwise.
    #[instrument(skip(self, service, password))]
    pub async fn login(
        &self,
        service: &dyn AuthService,
        email: &str,
        password: SecretString,
        role: Role,
    ) -> Result<User, AuthError> {
        let credentials = Credentials::parse(email, password, role)?;
        let user = service.authenticate(&credentials).await?;

        *lock(&self.current) = Some(user.clone());
        self.observers.notify(&AuthEvent::SignedIn(user.clone()));
        Ok(user)
    }

    /// Sign out. Notifies only if someone was signed in.
    pub fn logout(&self) {
        let previous = lock(&self.current).take();
        if let Some(user) = previous {
            self.observers.notify(&AuthEvent::SignedOut(user));
        }
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        lock(&self.current).clone()
    }

    /// Whether a user is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        lock(&self.current).is_some()
    }

    /// Observe sign-in and sign-out.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&AuthEvent) + Send + Sync + 'static,
    {
        self.observers.subscribe(callback)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::services::{MockAuthService, ValidationError};

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_owned())
    }

    fn recorder(store: &AuthStore) -> (Arc<Mutex<Vec<AuthEvent>>>, Subscription) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let sub = store.subscribe(move |event| lock(&sink).push(event.clone()));
        (events, sub)
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_then_logout() {
        let store = AuthStore::new();
        let service = MockAuthService::new(Duration::from_millis(1000));

        let user = store
            .login(&service, "user@demo.com", secret("password123"), Role::User)
            .await
            .unwrap();

        assert_eq!(user.role, Role::User);
        assert_eq!(store.current_user(), Some(user));
        assert!(store.is_authenticated());

        store.logout();
        assert_eq!(store.current_user(), None);
    }

    #[tokio::test]
    async fn test_blank_credentials_leave_state_unchanged() {
        let store = AuthStore::new();
        let service = MockAuthService::new(Duration::ZERO);
        let (events, _sub) = recorder(&store);

        let err = store
            .login(&service, "", secret(""), Role::User)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AuthError::Validation(ValidationError::MissingEmail)
        ));
        assert!(!store.is_authenticated());
        assert!(lock(&events).is_empty());
    }

    #[tokio::test]
    async fn test_failed_login_keeps_previous_user() {
        let store = AuthStore::new();
        let ok = MockAuthService::new(Duration::ZERO);
        store
            .login(&ok, "admin@inkzaar.com", secret("pw"), Role::Admin)
            .await
            .unwrap();

        let down = MockAuthService::new(Duration::ZERO).unavailable();
        let err = store
            .login(&down, "other@demo.com", secret("pw"), Role::User)
            .await
            .unwrap_err();

        assert!(err.is_transient());
        let current = store.current_user().unwrap();
        assert_eq!(current.email.as_str(), "admin@inkzaar.com");
        assert!(current.is_admin());
    }

    #[tokio::test]
    async fn test_second_login_replaces_user() {
        let store = AuthStore::new();
        let service = MockAuthService::new(Duration::ZERO);
        let (events, _sub) = recorder(&store);

        store
            .login(&service, "a@demo.com", secret("pw"), Role::User)
            .await
            .unwrap();
        store
            .login(&service, "b@demo.com", secret("pw"), Role::Admin)
            .await
            .unwrap();

        assert_eq!(store.current_user().unwrap().email.as_str(), "b@demo.com");
        assert_eq!(lock(&events).len(), 2);
    }

    #[tokio::test]
    async fn test_observers_see_sign_in_and_out() {
        let store = AuthStore::new();
        let service = MockAuthService::new(Duration::ZERO);
        let (events, sub) = recorder(&store);

        store.logout();
        let user = store
            .login(&service, "user@demo.com", secret("pw"), Role::User)
            .await
            .unwrap();
        store.logout();
        sub.unsubscribe();
        store
            .login(&service, "user@demo.com", secret("pw"), Role::User)
            .await
            .unwrap();

        assert_eq!(
            *lock(&events),
            vec![AuthEvent::SignedIn(user.clone()), AuthEvent::SignedOut(user)]
        );
    }
}
