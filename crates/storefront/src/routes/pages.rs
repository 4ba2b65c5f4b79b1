//! Static content pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use super::NavView;
use crate::catalog::{Highlight, Service, Stat};
use crate::filters;
use crate::middleware::Visitor;
use crate::state::AppState;

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub nav: NavView,
    pub stats: &'static [Stat],
    pub values: &'static [Highlight],
    pub service_titles: Vec<&'static str>,
}

/// Services page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/services.html")]
pub struct ServicesTemplate {
    pub nav: NavView,
    pub services: Vec<Service>,
}

/// Display the about page.
#[instrument(skip(state, shopper))]
pub async fn about(State(state): State<AppState>, Visitor(shopper): Visitor) -> impl IntoResponse {
    let catalog = state.catalog();
    AboutTemplate {
        nav: NavView::for_visitor(shopper.as_deref()),
        stats: catalog.about_stats(),
        values: catalog.about_values(),
        service_titles: catalog.services().iter().map(|s| s.title).collect(),
    }
}

/// Display the services page.
#[instrument(skip(state, shopper))]
pub async fn services(
    State(state): State<AppState>,
    Visitor(shopper): Visitor,
) -> impl IntoResponse {
    ServicesTemplate {
        nav: NavView::for_visitor(shopper.as_deref()),
        services: state.catalog().services().to_vec(),
    }
}
