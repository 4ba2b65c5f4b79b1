//! User dashboard.
//!
//! Requires a signed-in user.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use chrono::NaiveDate;
use tracing::instrument;

use inkzaar_core::OrderStatus;

use super::{Flash, MessageQuery, NavView};
use crate::catalog::{InfluencerStats, OrderRecord, Quotation};
use crate::filters;
use crate::middleware::RequireAuth;
use crate::state::AppState;
use crate::store::PlacedOrder;

// =============================================================================
// View Types
// =============================================================================

/// Order history row.
#[derive(Debug, Clone)]
pub struct OrderRowView {
    pub id: String,
    pub product: String,
    pub status: &'static str,
    pub badge_class: &'static str,
    pub date: String,
    pub price: String,
}

impl From<&PlacedOrder> for OrderRowView {
    fn from(order: &PlacedOrder) -> Self {
        let status = OrderStatus::Pending;
        Self {
            id: order.id.to_string(),
            product: order.product.clone(),
            status: status.label(),
            badge_class: status.badge_class(),
            date: format_date(order.placed_at.date_naive()),
            price: order.total.to_string(),
        }
    }
}

impl From<&OrderRecord> for OrderRowView {
    fn from(order: &OrderRecord) -> Self {
        Self {
            id: order.id.to_string(),
            product: order.product.to_string(),
            status: order.status.label(),
            badge_class: order.status.badge_class(),
            date: format_date(order.date),
            price: order.price.to_string(),
        }
    }
}

/// Quotation row.
#[derive(Debug, Clone)]
pub struct QuotationView {
    pub id: String,
    pub service: &'static str,
    pub status: &'static str,
    pub badge_class: &'static str,
    pub date: String,
    pub quote: Option<String>,
}

impl From<&Quotation> for QuotationView {
    fn from(quotation: &Quotation) -> Self {
        Self {
            id: quotation.id.to_string(),
            service: quotation.service,
            status: quotation.status.label(),
            badge_class: quotation.status.badge_class(),
            date: format_date(quotation.date),
            quote: quotation.quote.map(|q| q.to_string()),
        }
    }
}

/// Influencer programme card.
#[derive(Debug, Clone)]
pub struct InfluencerView {
    pub points: u32,
    pub collaborations: u32,
    pub earnings: String,
    pub tier: &'static str,
    pub next_tier: Option<&'static str>,
    pub next_tier_points: Option<u32>,
    pub progress_percent: u32,
}

impl From<InfluencerStats> for InfluencerView {
    fn from(stats: InfluencerStats) -> Self {
        let tier = stats.tier();
        Self {
            points: stats.points,
            collaborations: stats.collaborations,
            earnings: stats.earnings.to_string(),
            tier: tier.name(),
            next_tier: tier.next().map(|t| t.name()),
            next_tier_points: stats.next_tier_points(),
            progress_percent: stats.progress_percent(),
        }
    }
}

/// `Jan 15, 2024`
fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

// =============================================================================
// Templates
// =============================================================================

/// User dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "account/dashboard.html")]
pub struct DashboardTemplate {
    pub nav: NavView,
    pub flash: Flash,
    pub user_name: String,
    pub user_email: String,
    pub cart_items: u64,
    pub cart_total: String,
    pub orders: Vec<OrderRowView>,
    pub quotations: Vec<QuotationView>,
    pub influencer: InfluencerView,
}

fn messages(code: &str) -> Option<&'static str> {
    match code {
        "order_placed" => Some("Order placed successfully! We'll be in touch about delivery."),
        _ => None,
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the user dashboard.
///
/// Orders placed in this session come first, followed by the account history.
#[instrument(skip(state, auth, flash), fields(email = %auth.user.email))]
pub async fn dashboard(
    State(state): State<AppState>,
    auth: RequireAuth,
    Query(flash): Query<MessageQuery>,
) -> impl IntoResponse {
    let RequireAuth { user, shopper } = auth;
    let catalog = state.catalog();

    let orders = shopper
        .orders()
        .iter()
        .map(OrderRowView::from)
        .chain(catalog.order_history().iter().map(OrderRowView::from))
        .collect();

    DashboardTemplate {
        nav: NavView::for_shopper(&shopper),
        flash: flash.resolve(messages),
        user_name: user.name,
        user_email: user.email.to_string(),
        cart_items: shopper.cart().total_items(),
        cart_total: shopper.cart().total_price().to_string(),
        orders,
        quotations: catalog.quotations().iter().map(QuotationView::from).collect(),
        influencer: InfluencerView::from(catalog.influencer_stats()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "Jan 5, 2024");
    }

    #[test]
    fn test_influencer_view_for_bronze() {
        let view = InfluencerView::from(Catalog::seeded().influencer_stats());
        assert_eq!(view.tier, "Bronze");
        assert_eq!(view.next_tier, Some("Silver"));
        assert_eq!(view.next_tier_points, Some(500));
        assert_eq!(view.progress_percent, 50);
    }
}
