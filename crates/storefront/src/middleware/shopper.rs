//! Extractor that resolves the caller's shopper session.

use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::{ShopperId, session_keys};
use crate::state::AppState;
use crate::store::ShopperSession;

/// The cart and auth state belonging to this browser.
///
/// A shopper ID is minted and stored in the cookie session on first use,
/// so only handlers that change state extract this. Pages that just read
/// use [`Visitor`].
///
/// ```rust,ignore
/// async fn handler(Shopper(shopper): Shopper) -> String {
///     format!("{} items", shopper.cart().total_items())
/// }
/// ```
pub struct Shopper(pub Arc<ShopperSession>);

impl FromRequestParts<AppState> for Shopper {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = request_session(parts)?;
        let id = shopper_id(&session).await?;
        Ok(Self(state.shoppers().get_or_create(id).await))
    }
}

/// The browser's shopper session if it already has one.
///
/// Never writes to the cookie session or the registry, so cookieless
/// traffic on read-only pages leaves no state behind.
pub struct Visitor(pub Option<Arc<ShopperSession>>);

impl FromRequestParts<AppState> for Visitor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = request_session(parts)?;
        let Some(id) = session.get::<ShopperId>(session_keys::SHOPPER_ID).await? else {
            return Ok(Self(None));
        };
        Ok(Self(state.shoppers().get(&id).await))
    }
}

fn request_session(parts: &Parts) -> Result<Session, AppError> {
    parts
        .extensions
        .get::<Session>()
        .cloned()
        .ok_or_else(|| AppError::Internal("session layer missing".to_string()))
}

/// Read the shopper ID from the session, minting one if absent.
async fn shopper_id(session: &Session) -> Result<ShopperId, AppError> {
    if let Some(id) = session.get::<ShopperId>(session_keys::SHOPPER_ID).await? {
        return Ok(id);
    }
    let id = ShopperId::generate();
    session.insert(session_keys::SHOPPER_ID, id).await?;
    Ok(id)
}
