//! Cart route handlers.
//!
//! Mutations redirect back to the page they came from. When the request
//! comes from HTMX (`HX-Request`), `/cart/add` answers with the cart badge
//! fragment and an `HX-Trigger` instead.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::HeaderMap,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use inkzaar_core::ProductId;

use super::{Flash, MessageQuery, NavView};
use crate::catalog::Product;
use crate::filters;
use crate::middleware::{Shopper, Visitor};
use crate::state::AppState;
use crate::store::{CartItem, CartSnapshot, NewCartItem, OrderSummary};

/// Cap on units added in one request; larger amounts go through `/cart/update`.
const MAX_UNITS_PER_ADD: u32 = 100;

// =============================================================================
// View Types
// =============================================================================

/// Cart line display data for templates.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            image: item.image.clone(),
            quantity: item.quantity,
            price: item.price.to_string(),
            line_price: item.line_total().to_string(),
        }
    }
}

/// Order summary display data.
#[derive(Debug, Clone)]
pub struct SummaryView {
    pub subtotal: String,
    pub shipping: String,
    pub tax: String,
    pub total: String,
}

impl From<OrderSummary> for SummaryView {
    fn from(summary: OrderSummary) -> Self {
        Self {
            subtotal: summary.subtotal.to_string(),
            shipping: if summary.shipping.get() == 0 {
                "Free".to_string()
            } else {
                summary.shipping.to_string()
            },
            tax: summary.tax.to_string(),
            total: summary.total.to_string(),
        }
    }
}

/// Cart display data for templates.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: u64,
    pub summary: SummaryView,
}

impl From<&CartSnapshot> for CartView {
    fn from(snapshot: &CartSnapshot) -> Self {
        Self {
            items: snapshot.items.iter().map(CartItemView::from).collect(),
            item_count: snapshot.total_items,
            summary: SummaryView::from(snapshot.summary()),
        }
    }
}

// =============================================================================
// Form Types
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub id: String,
    pub quantity: Option<u32>,
    /// Page to return to; only local paths are honoured.
    pub redirect: Option<String>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub id: String,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub id: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub nav: NavView,
    pub flash: Flash,
    pub cart: CartView,
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

fn messages(code: &str) -> Option<&'static str> {
    match code {
        "removed" => Some("Item removed from your cart."),
        "cleared" => Some("All items have been removed from your cart."),
        "updated" => Some("Cart updated."),
        "empty" => Some("Your cart is empty. Add something before checking out."),
        _ => None,
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart page.
#[instrument(skip(shopper, flash))]
pub async fn show(
    Visitor(shopper): Visitor,
    Query(flash): Query<MessageQuery>,
) -> impl IntoResponse {
    let snapshot = shopper
        .as_deref()
        .map(|shopper| shopper.cart().snapshot())
        .unwrap_or_default();
    CartShowTemplate {
        nav: NavView::for_visitor(shopper.as_deref()),
        flash: flash.resolve(messages),
        cart: CartView::from(&snapshot),
    }
}

/// Add units of a catalog product to the cart.
///
/// Each unit is a separate add, so the line quantity grows by `quantity`.
#[instrument(skip(state, shopper, headers))]
pub async fn add(
    State(state): State<AppState>,
    Shopper(shopper): Shopper,
    headers: HeaderMap,
    Form(form): Form<AddToCartForm>,
) -> Response {
    let back = local_path(form.redirect.as_deref()).unwrap_or("/products");
    let separator = if back.contains('?') { '&' } else { '?' };

    let Some(product) = state.catalog().product(&ProductId::new(form.id.as_str())) else {
        tracing::warn!(id = %form.id, "add to cart for unknown product");
        return Redirect::to(&format!("{back}{separator}error=unknown_product")).into_response();
    };

    let units = form.quantity.unwrap_or(1).clamp(1, MAX_UNITS_PER_ADD);
    for _ in 0..units {
        shopper.cart().add_to_cart(new_cart_item(product));
    }

    if headers.contains_key("hx-request") {
        return (
            AppendHeaders([("HX-Trigger", "cart-updated")]),
            CartCountTemplate {
                count: shopper.cart().total_items(),
            },
        )
            .into_response();
    }

    Redirect::to(&format!("{back}{separator}success=added")).into_response()
}

/// Set a line's quantity. Zero or less removes the line.
#[instrument(skip(shopper))]
pub async fn update(Visitor(shopper): Visitor, Form(form): Form<UpdateCartForm>) -> Redirect {
    if let Some(shopper) = shopper {
        shopper
            .cart()
            .update_quantity(&ProductId::new(form.id), form.quantity);
    }
    Redirect::to("/cart?success=updated")
}

/// Remove a line from the cart.
#[instrument(skip(shopper))]
pub async fn remove(
    Visitor(shopper): Visitor,
    Form(form): Form<RemoveFromCartForm>,
) -> Redirect {
    if let Some(shopper) = shopper {
        shopper.cart().remove_from_cart(&ProductId::new(form.id));
    }
    Redirect::to("/cart?success=removed")
}

/// Empty the cart.
#[instrument(skip(shopper))]
pub async fn clear(Visitor(shopper): Visitor) -> Redirect {
    if let Some(shopper) = shopper {
        shopper.cart().clear_cart();
    }
    Redirect::to("/cart?success=cleared")
}

/// Get cart count badge.
#[instrument(skip(shopper))]
pub async fn count(Visitor(shopper): Visitor) -> impl IntoResponse {
    CartCountTemplate {
        count: shopper.map_or(0, |shopper| shopper.cart().total_items()),
    }
}

fn new_cart_item(product: &Product) -> NewCartItem {
    NewCartItem {
        id: product.id.clone(),
        name: product.name.to_string(),
        price: product.price,
        image: product.image.to_string(),
    }
}

/// Accept only same-site absolute paths as redirect targets.
fn local_path(target: Option<&str>) -> Option<&str> {
    target.filter(|t| t.starts_with('/') && !t.starts_with("//") && !t.contains('\\'))
}
