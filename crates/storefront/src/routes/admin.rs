//! Admin dashboard.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use super::NavView;
use crate::catalog::{Activity, AdminStat};
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Admin dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "account/admin.html")]
pub struct AdminDashboardTemplate {
    pub nav: NavView,
    pub admin_name: String,
    pub stats: &'static [AdminStat],
    pub actions: &'static [&'static str],
    pub activity: &'static [Activity],
}

/// Display the admin dashboard.
#[instrument(skip(state, admin), fields(email = %admin.user.email))]
pub async fn dashboard(State(state): State<AppState>, admin: RequireAdmin) -> impl IntoResponse {
    let catalog = state.catalog();
    AdminDashboardTemplate {
        nav: NavView::for_shopper(&admin.shopper),
        admin_name: admin.user.name,
        stats: catalog.admin_stats(),
        actions: catalog.admin_actions(),
        activity: catalog.recent_activity(),
    }
}
