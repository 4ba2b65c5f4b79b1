//! Checkout route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use inkzaar_core::PaymentMethod;

use super::cart::CartView;
use super::{Flash, MessageQuery, NavView};
use crate::error::add_breadcrumb;
use crate::filters;
use crate::middleware::Visitor;
use crate::services::{OrderError, OrderRequest, ShippingDetails};
use crate::state::AppState;

// =============================================================================
// View Types
// =============================================================================

/// Payment method radio button.
#[derive(Debug, Clone)]
pub struct PaymentOptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

// =============================================================================
// Form Types
// =============================================================================

/// Checkout form data.
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub payment: PaymentMethod,
    /// Checkbox; present (`on`) when ticked.
    pub save_info: Option<String>,
}

impl CheckoutForm {
    fn shipping(&self) -> ShippingDetails {
        ShippingDetails {
            email: self.email.trim().to_owned(),
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            address: self.address.trim().to_owned(),
            city: self.city.trim().to_owned(),
            state: self.state.trim().to_owned(),
            zip_code: self.zip_code.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/checkout.html")]
pub struct CheckoutTemplate {
    pub nav: NavView,
    pub flash: Flash,
    pub cart: CartView,
    /// Prefilled from saved details or the signed-in user's email.
    pub shipping: ShippingDetails,
    pub save_info: bool,
    pub payment_options: Vec<PaymentOptionView>,
}

fn messages(code: &str) -> Option<&'static str> {
    match code {
        "missing_details" => Some("Please fill in every shipping field."),
        "unavailable" => Some("We couldn't place your order right now. Please try again."),
        _ => None,
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Display checkout form. An empty cart goes back to the cart page.
#[instrument(skip(shopper, flash))]
pub async fn page(Visitor(shopper): Visitor, Query(flash): Query<MessageQuery>) -> Response {
    let Some(shopper) = shopper.filter(|shopper| shopper.cart().total_items() > 0) else {
        return Redirect::to("/cart?error=empty").into_response();
    };
    let snapshot = shopper.cart().snapshot();

    let saved = shopper.saved_shipping();
    let save_info = saved.is_some();
    let shipping = saved.unwrap_or_else(|| ShippingDetails {
        email: shopper
            .auth()
            .current_user()
            .map(|user| user.email.to_string())
            .unwrap_or_default(),
        ..ShippingDetails::default()
    });

    CheckoutTemplate {
        nav: NavView::for_shopper(&shopper),
        flash: flash.resolve(messages),
        cart: CartView::from(&snapshot),
        shipping,
        save_info,
        payment_options: PaymentMethod::ALL
            .into_iter()
            .map(|method| PaymentOptionView {
                value: method.as_str(),
                label: method.label(),
                checked: method == PaymentMethod::default(),
            })
            .collect(),
    }
    .into_response()
}

/// Place the order for the current cart.
///
/// On success the ordered units leave the cart, the order is added to the
/// shopper's history and the dashboard is shown. Units added while the
/// order was being placed stay in the cart.
#[instrument(skip(state, shopper, form), fields(payment = form.payment.as_str()))]
pub async fn submit(
    State(state): State<AppState>,
    Visitor(shopper): Visitor,
    Form(form): Form<CheckoutForm>,
) -> Redirect {
    let Some(shopper) = shopper else {
        return Redirect::to("/cart?error=empty");
    };
    let request = OrderRequest {
        shipping: form.shipping(),
        payment: form.payment,
        cart: shopper.cart().snapshot(),
    };

    match state.order_service().place_order(&request).await {
        Ok(confirmation) => {
            tracing::info!(
                order_id = %confirmation.order_id,
                total = confirmation.total().get(),
                "Order placed"
            );
            add_breadcrumb(
                "checkout",
                "Order placed",
                Some(&[("order_id", confirmation.order_id.as_str())]),
            );
            shopper.cart().remove_ordered(&request.cart);
            shopper.record_order(&confirmation);
            let saved = form.save_info.is_some().then(|| request.shipping.clone());
            shopper.set_saved_shipping(saved);
            Redirect::to("/dashboard?success=order_placed")
        }
        Err(OrderError::EmptyCart) => Redirect::to("/cart?error=empty"),
        Err(err @ OrderError::Validation(_)) => {
            tracing::debug!(error = %err, "checkout rejected");
            Redirect::to("/checkout?error=missing_details")
        }
        Err(err @ OrderError::Unavailable(_)) => {
            tracing::warn!(error = %err, "order service unavailable");
            Redirect::to("/checkout?error=unavailable")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_trims_shipping_fields() {
        let form = CheckoutForm {
            email: " a@b.co ".into(),
            first_name: "Asha".into(),
            last_name: "Rao".into(),
            address: "  ".into(),
            city: "Pune".into(),
            state: "MH".into(),
            zip_code: "411001".into(),
            phone: "1".into(),
            payment: PaymentMethod::Card,
            save_info: None,
        };
        let shipping = form.shipping();
        assert_eq!(shipping.email, "a@b.co");
        assert!(shipping.validate().is_err());
    }
}
