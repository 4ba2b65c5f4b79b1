//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                   - Liveness check
//! GET  /                         - Home page
//! GET  /about                    - About page
//! GET  /services                 - Services page
//! GET  /blog                     - Blog listing (?category=)
//!
//! # Products
//! GET  /products                 - Catalog (?q=, ?category=)
//! GET  /products/{id}            - Product detail
//!
//! # Cart
//! GET  /cart                     - Cart page with order summary
//! POST /cart/add                 - Add units of a product
//! POST /cart/update              - Set a line's quantity
//! POST /cart/remove              - Remove a line
//! POST /cart/clear               - Empty the cart
//! GET  /cart/count               - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout                 - Checkout form
//! POST /checkout                 - Place order
//!
//! # Auth
//! GET  /login                    - Login page (?role=user|admin)
//! POST /login                    - Sign in
//! POST /logout                   - Sign out
//!
//! # Dashboards
//! GET  /dashboard                - User dashboard (requires sign-in)
//! GET  /admin                    - Admin dashboard (requires admin)
//!
//! # Forms
//! GET  /influencer               - Influencer hub
//! POST /influencer/collaborate   - Collaboration request
//! POST /influencer/register      - Influencer registration
//! GET  /contact                  - Contact page
//! POST /contact                  - Contact message
//! ```
//!
//! Form posts follow Post/Redirect/Get and report outcomes through
//! `?success=` / `?error=` codes that each page maps to a message.

pub mod account;
pub mod admin;
pub mod auth;
pub mod blog;
pub mod cart;
pub mod checkout;
pub mod contact;
pub mod home;
pub mod influencer;
pub mod pages;
pub mod products;

use axum::{
    Router,
    extract::Request,
    middleware::from_fn,
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::middleware::{create_session_layer, request_id_middleware};
use crate::state::AppState;
use crate::store::ShopperSession;

// =============================================================================
// Shared View Types
// =============================================================================

/// Navbar data rendered on every page.
#[derive(Debug, Clone, Default)]
pub struct NavView {
    pub cart_count: u64,
    pub user_name: Option<String>,
    pub is_admin: bool,
}

impl NavView {
    /// Navbar for the given shopper.
    #[must_use]
    pub fn for_shopper(shopper: &ShopperSession) -> Self {
        let user = shopper.auth().current_user();
        Self {
            cart_count: shopper.cart().total_items(),
            is_admin: user.as_ref().is_some_and(crate::models::User::is_admin),
            user_name: user.map(|u| u.name),
        }
    }

    /// Navbar for a browser that may not have a shopper session yet.
    #[must_use]
    pub fn for_visitor(shopper: Option<&ShopperSession>) -> Self {
        shopper.map(Self::for_shopper).unwrap_or_default()
    }
}

/// Query parameters for error/success display.
#[derive(Debug, Default, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Flash messages resolved from a [`MessageQuery`].
#[derive(Debug, Default)]
pub struct Flash {
    pub error: Option<String>,
    pub success: Option<String>,
}

impl MessageQuery {
    /// Map the codes through a page's message table. Unknown codes are dropped.
    #[must_use]
    pub fn resolve(&self, messages: fn(&str) -> Option<&'static str>) -> Flash {
        let lookup = |code: &Option<String>| code.as_deref().and_then(messages).map(String::from);
        Flash {
            error: lookup(&self.error),
            success: lookup(&self.success),
        }
    }
}

/// Trim an optional form field, treating blank input as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

// =============================================================================
// Routers
// =============================================================================

/// Create the page routes router.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/about", get(pages::about))
        .route("/services", get(pages::services))
        .route("/blog", get(blog::index))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create the auth and dashboard routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/dashboard", get(account::dashboard))
        .route("/admin", get(admin::dashboard))
}

/// Create the influencer hub routes router.
pub fn influencer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(influencer::hub))
        .route("/collaborate", post(influencer::collaborate))
        .route("/register", post(influencer::register))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(page_routes())
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .route("/checkout", get(checkout::page).post(checkout::submit))
        .merge(account_routes())
        .nest("/influencer", influencer_routes())
        .route("/contact", get(contact::page).post(contact::submit))
}

/// The complete application: routes, sessions, request IDs and tracing.
///
/// Sentry layers are added by the binary.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .layer(session_layer)
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(code: &str) -> Option<&'static str> {
        match code {
            "added" => Some("Added to cart!"),
            _ => None,
        }
    }

    #[test]
    fn test_resolve_maps_known_codes_only() {
        let query = MessageQuery {
            error: Some("<script>".to_string()),
            success: Some("added".to_string()),
        };
        let flash = query.resolve(messages);
        assert_eq!(flash.success.as_deref(), Some("Added to cart!"));
        assert!(flash.error.is_none());
    }
}
