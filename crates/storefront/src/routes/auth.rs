//! Authentication route handlers.
//!
//! Sign-in goes through the shopper's [`AuthStore`](crate::store::AuthStore),
//! which calls the configured [`AuthService`](crate::services::AuthService).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use secrecy::SecretString;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use inkzaar_core::Role;

use super::{Flash, MessageQuery, NavView};
use crate::error::Result;
use crate::filters;
use crate::middleware::{Shopper, Visitor};
use crate::services::{AuthError, ValidationError};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: Role,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Query Types
// =============================================================================

/// Login page query.
#[derive(Debug, Default, Deserialize)]
pub struct LoginQuery {
    pub role: Option<Role>,
}

// =============================================================================
// Templates
// =============================================================================

/// Role tab on the login page.
#[derive(Debug, Clone)]
pub struct RoleOptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub nav: NavView,
    pub flash: Flash,
    pub roles: Vec<RoleOptionView>,
}

fn messages(code: &str) -> Option<&'static str> {
    match code {
        "missing_email" => Some("Please enter your email address."),
        "missing_password" => Some("Please enter your password."),
        "invalid_email" => Some("Please enter a valid email address."),
        "failed" => Some("Login failed. Please check your credentials and try again."),
        "signed_out" => Some("You have been signed out."),
        _ => None,
    }
}

fn error_code(err: &AuthError) -> &'static str {
    match err {
        AuthError::Validation(ValidationError::MissingEmail) => "missing_email",
        AuthError::Validation(ValidationError::MissingPassword) => "missing_password",
        AuthError::Validation(ValidationError::InvalidEmail(_)) => "invalid_email",
        AuthError::Unavailable(_) => "failed",
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the login page.
#[instrument(skip(shopper, flash))]
pub async fn login_page(
    Visitor(shopper): Visitor,
    Query(query): Query<LoginQuery>,
    Query(flash): Query<MessageQuery>,
) -> impl IntoResponse {
    let selected = query.role.unwrap_or_default();
    LoginTemplate {
        nav: NavView::for_visitor(shopper.as_deref()),
        flash: flash.resolve(messages),
        roles: [Role::User, Role::Admin]
            .into_iter()
            .map(|role| RoleOptionView {
                value: role.as_str(),
                label: role.label(),
                checked: role == selected,
            })
            .collect(),
    }
}

/// Handle login form submission.
///
/// The session ID is rotated on success. Admins land on `/admin`, everyone
/// else on `/dashboard`.
#[instrument(skip(state, shopper, session, form), fields(role = %form.role))]
pub async fn login(
    State(state): State<AppState>,
    Shopper(shopper): Shopper,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect> {
    let role_query = match form.role {
        Role::User => "",
        Role::Admin => "role=admin&",
    };

    match shopper
        .auth()
        .login(
            state.auth_service(),
            &form.email,
            SecretString::from(form.password),
            form.role,
        )
        .await
    {
        Ok(user) => {
            session.cycle_id().await?;
            tracing::info!(email = %user.email, role = %user.role, "Signed in");
            Ok(Redirect::to(if user.is_admin() {
                "/admin"
            } else {
                "/dashboard"
            }))
        }
        Err(err) => {
            if err.is_transient() {
                tracing::warn!(error = %err, "Login failed");
            } else {
                tracing::debug!(error = %err, "Login rejected");
            }
            Ok(Redirect::to(&format!(
                "/login?{role_query}error={}",
                error_code(&err)
            )))
        }
    }
}

/// Sign out and return to the login page.
#[instrument(skip(shopper))]
pub async fn logout(Visitor(shopper): Visitor) -> Redirect {
    if let Some(shopper) = shopper {
        shopper.auth().logout();
    }
    Redirect::to("/login?success=signed_out")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_error_code_has_a_message() {
        let errors = [
            AuthError::Validation(ValidationError::MissingEmail),
            AuthError::Validation(ValidationError::MissingPassword),
            AuthError::Unavailable("down".into()),
        ];
        for err in &errors {
            assert!(messages(error_code(err)).is_some(), "{err}");
        }
    }

    #[test]
    fn test_login_form_debug_hides_password() {
        let form = LoginForm {
            email: "user@demo.com".into(),
            password: "hunter22".into(),
            role: Role::User,
        };
        assert!(!format!("{form:?}").contains("hunter22"));
    }
}
