//! Influencer hub route handlers.
//!
//! The hub lists the tier programme and hosts two forms: brand collaboration
//! requests and influencer registration. Both go through the
//! [`InquiryService`](crate::services::InquiryService).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tracing::instrument;

use super::{Flash, MessageQuery, NavView, non_blank};
use crate::catalog::{Highlight, Stat, Tier};
use crate::filters;
use crate::middleware::Visitor;
use crate::services::{CollaborationRequest, InfluencerApplication, Inquiry, InquiryError};
use crate::state::AppState;

// =============================================================================
// View Types
// =============================================================================

/// Tier card.
#[derive(Debug, Clone)]
pub struct TierView {
    pub name: &'static str,
    pub range: String,
    pub benefits: &'static [&'static str],
}

impl From<Tier> for TierView {
    fn from(tier: Tier) -> Self {
        Self {
            name: tier.name(),
            range: tier.range_label(),
            benefits: tier.benefits(),
        }
    }
}

/// All tiers, lowest first.
pub(super) fn tier_views() -> Vec<TierView> {
    Tier::ALL.into_iter().map(TierView::from).collect()
}

// =============================================================================
// Form Types
// =============================================================================

/// Brand collaboration form data.
#[derive(Debug, Deserialize)]
pub struct CollaborationForm {
    #[serde(default)]
    pub brand_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub timeline: String,
    pub requirements: Option<String>,
}

impl From<CollaborationForm> for Inquiry {
    fn from(form: CollaborationForm) -> Self {
        Self::Collaboration(CollaborationRequest {
            brand_name: form.brand_name.trim().to_owned(),
            description: form.description.trim().to_owned(),
            budget: form.budget.trim().to_owned(),
            timeline: form.timeline.trim().to_owned(),
            requirements: non_blank(form.requirements),
        })
    }
}

/// Influencer registration form data.
#[derive(Debug, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    #[serde(default)]
    pub followers: String,
    #[serde(default)]
    pub niche: String,
}

impl From<RegistrationForm> for Inquiry {
    fn from(form: RegistrationForm) -> Self {
        Self::InfluencerRegistration(InfluencerApplication {
            name: form.name.trim().to_owned(),
            email: form.email.trim().to_owned(),
            phone: form.phone.trim().to_owned(),
            instagram: non_blank(form.instagram),
            facebook: non_blank(form.facebook),
            youtube: non_blank(form.youtube),
            twitter: non_blank(form.twitter),
            followers: form.followers.trim().to_owned(),
            niche: form.niche.trim().to_owned(),
        })
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Influencer hub template.
#[derive(Template, WebTemplate)]
#[template(path = "influencer/hub.html")]
pub struct InfluencerHubTemplate {
    pub nav: NavView,
    pub flash: Flash,
    pub highlights: &'static [Stat],
    pub steps: &'static [Highlight],
    pub tiers: Vec<TierView>,
    pub niches: &'static [&'static str],
}

/// Content niches offered on the registration form.
const NICHES: [&str; 6] = ["Fashion", "Lifestyle", "Technology", "Food", "Travel", "Fitness"];

fn messages(code: &str) -> Option<&'static str> {
    match code {
        "collaboration_sent" => {
            Some("Thanks! Our team will review your collaboration request shortly.")
        }
        "registered" => Some("Welcome aboard! We'll reach out about your first collaboration."),
        "missing_fields" => Some("Please fill in all required fields."),
        "unavailable" => Some("We couldn't submit your request right now. Please try again."),
        _ => None,
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the influencer hub.
#[instrument(skip(state, shopper, flash))]
pub async fn hub(
    State(state): State<AppState>,
    Visitor(shopper): Visitor,
    Query(flash): Query<MessageQuery>,
) -> impl IntoResponse {
    let catalog = state.catalog();
    InfluencerHubTemplate {
        nav: NavView::for_visitor(shopper.as_deref()),
        flash: flash.resolve(messages),
        highlights: catalog.influencer_highlights(),
        steps: catalog.influencer_steps(),
        tiers: tier_views(),
        niches: &NICHES,
    }
}

/// Handle a brand collaboration request.
#[instrument(skip(state, form))]
pub async fn collaborate(
    State(state): State<AppState>,
    Form(form): Form<CollaborationForm>,
) -> Redirect {
    submit(&state, form.into(), "collaboration_sent").await
}

/// Handle an influencer registration.
#[instrument(skip(state, form))]
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegistrationForm>,
) -> Redirect {
    submit(&state, form.into(), "registered").await
}

async fn submit(state: &AppState, inquiry: Inquiry, success: &str) -> Redirect {
    match state.inquiry_service().submit(&inquiry).await {
        Ok(receipt) => {
            tracing::info!(
                kind = inquiry.kind(),
                reference = %receipt.reference,
                "Inquiry received"
            );
            Redirect::to(&format!("/influencer?success={success}"))
        }
        Err(InquiryError::Validation(missing)) => {
            tracing::debug!(kind = inquiry.kind(), %missing, "Inquiry rejected");
            Redirect::to("/influencer?error=missing_fields")
        }
        Err(err @ InquiryError::Unavailable(_)) => {
            tracing::warn!(kind = inquiry.kind(), error = %err, "Inquiry service unavailable");
            Redirect::to("/influencer?error=unavailable")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_views_in_order() {
        let names: Vec<_> = tier_views().iter().map(|t| t.name).collect();
        assert_eq!(names, ["Bronze", "Silver", "Gold"]);
    }

    #[test]
    fn test_collaboration_form_trims_and_drops_blank_optionals() {
        let form = CollaborationForm {
            brand_name: " Acme ".into(),
            description: "Launch".into(),
            budget: " 50000 ".into(),
            timeline: "4 weeks".into(),
            requirements: Some("  ".into()),
        };
        let Inquiry::Collaboration(request) = Inquiry::from(form) else {
            panic!("expected a collaboration request");
        };
        assert_eq!(request.brand_name, "Acme");
        assert_eq!(request.budget, "50000");
        assert_eq!(request.requirements, None);
    }

    #[test]
    fn test_registration_form_keeps_social_handles() {
        let form = RegistrationForm {
            name: "Riya".into(),
            email: "riya@example.com".into(),
            phone: " 9876543210 ".into(),
            instagram: Some("@riya".into()),
            facebook: Some("riya.creates".into()),
            youtube: None,
            twitter: Some(String::new()),
            followers: "25k".into(),
            niche: "Fashion".into(),
        };
        let inquiry = Inquiry::from(form);
        assert!(inquiry.validate().is_ok());
        let Inquiry::InfluencerRegistration(application) = inquiry else {
            panic!("expected an influencer registration");
        };
        assert_eq!(application.phone, "9876543210");
        assert_eq!(application.facebook.as_deref(), Some("riya.creates"));
        assert_eq!(application.twitter, None);
    }
}
