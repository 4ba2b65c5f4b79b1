//! Authentication extractors.
//!
//! Both read the signed-in user from the caller's shopper session.

use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};

use inkzaar_core::Role;

use super::shopper::Visitor;
use crate::error::AppError;
use crate::models::User;
use crate::state::AppState;
use crate::store::ShopperSession;

/// Extractor that requires a signed-in user.
///
/// If nobody is signed in, redirects to the login page.
///
/// ```rust,ignore
/// async fn protected_handler(auth: RequireAuth) -> impl IntoResponse {
///     format!("Hello, {}!", auth.user.name)
/// }
/// ```
pub struct RequireAuth {
    pub user: User,
    pub shopper: Arc<ShopperSession>,
}

/// Extractor that requires a signed-in admin.
pub struct RequireAdmin {
    pub user: User,
    pub shopper: Arc<ShopperSession>,
}

/// Error returned when a page needs a user the caller does not have.
#[derive(Debug)]
pub enum AuthRejection {
    /// Nobody is signed in; send them to log in with this role preselected.
    RedirectToLogin(Role),
    /// Signed in without the required role.
    Forbidden,
    /// The shopper session could not be resolved.
    Internal(AppError),
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin(Role::User) => Redirect::to("/login").into_response(),
            Self::RedirectToLogin(Role::Admin) => {
                Redirect::to("/login?role=admin").into_response()
            }
            Self::Forbidden => {
                AppError::Forbidden("admin access required".to_string()).into_response()
            }
            Self::Internal(err) => err.into_response(),
        }
    }
}

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Visitor(shopper) = Visitor::from_request_parts(parts, state)
            .await
            .map_err(AuthRejection::Internal)?;
        let shopper = shopper.ok_or(AuthRejection::RedirectToLogin(Role::User))?;

        let user = shopper
            .auth()
            .current_user()
            .ok_or(AuthRejection::RedirectToLogin(Role::User))?;

        Ok(Self { user, shopper })
    }
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Visitor(shopper) = Visitor::from_request_parts(parts, state)
            .await
            .map_err(AuthRejection::Internal)?;
        let shopper = shopper.ok_or(AuthRejection::RedirectToLogin(Role::Admin))?;

        let user = shopper
            .auth()
            .current_user()
            .ok_or(AuthRejection::RedirectToLogin(Role::Admin))?;

        if !user.is_admin() {
            tracing::warn!(email = %user.email, "non-admin tried to open admin dashboard");
            return Err(AuthRejection::Forbidden);
        }

        Ok(Self { user, shopper })
    }
}
