//! Signed-in user identity.

use serde::{Deserialize, Serialize};

use inkzaar_core::{Email, Role};

/// The user held by a shopper's auth store while signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name, derived from the email when the service has none.
    pub name: String,
    /// Normalized email address.
    pub email: Email,
    /// Role picked on the login page.
    pub role: Role,
}

impl User {
    /// Build a user whose display name comes from the email's local part.
    #[must_use]
    pub fn from_email(email: Email, role: Role) -> Self {
        Self {
            name: email.display_name(),
            email,
            role,
        }
    }

    /// Whether this user may open the admin dashboard.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_email_derives_name() {
        let user = User::from_email(Email::parse("jane.doe@example.com").unwrap(), Role::User);
        assert_eq!(user.name, "Jane Doe");
        assert!(!user.is_admin());
    }

    #[test]
    fn test_admin_role() {
        let user = User::from_email(Email::parse("ops@inkzaar.com").unwrap(), Role::Admin);
        assert!(user.is_admin());
    }
}
