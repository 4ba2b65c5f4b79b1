//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use super::NavView;
use super::influencer::{TierView, tier_views};
use super::products::ProductCardView;
use crate::catalog::{Highlight, Service, Stat};
use crate::filters;
use crate::middleware::Visitor;
use crate::state::AppState;

/// Products shown in the home page showcase.
const FEATURED_PRODUCTS: usize = 3;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub nav: NavView,
    pub slides: &'static [Highlight],
    pub features: &'static [Highlight],
    pub stats: &'static [Stat],
    pub products: Vec<ProductCardView>,
    pub services: Vec<Service>,
    pub tiers: Vec<TierView>,
}

/// Display the home page.
#[instrument(skip(state, shopper))]
pub async fn home(State(state): State<AppState>, Visitor(shopper): Visitor) -> impl IntoResponse {
    let catalog = state.catalog();
    HomeTemplate {
        nav: NavView::for_visitor(shopper.as_deref()),
        slides: catalog.hero_slides(),
        features: catalog.home_features(),
        stats: catalog.home_stats(),
        products: catalog
            .featured(FEATURED_PRODUCTS)
            .map(ProductCardView::from)
            .collect(),
        services: catalog.services().to_vec(),
        tiers: tier_views(),
    }
}
