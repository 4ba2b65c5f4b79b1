//! Contact page route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tracing::instrument;

use inkzaar_core::Email;

use super::{Flash, MessageQuery, NavView, non_blank};
use crate::catalog::ContactBlock;
use crate::filters;
use crate::middleware::Visitor;
use crate::services::{ContactMessage, Inquiry, InquiryError};
use crate::state::AppState;

/// Contact form data.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl From<ContactForm> for Inquiry {
    fn from(form: ContactForm) -> Self {
        Self::Contact(ContactMessage {
            name: form.name.trim().to_owned(),
            email: form.email.trim().to_owned(),
            phone: non_blank(form.phone),
            subject: form.subject.trim().to_owned(),
            message: form.message.trim().to_owned(),
        })
    }
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/contact.html")]
pub struct ContactTemplate {
    pub nav: NavView,
    pub flash: Flash,
    pub blocks: &'static [ContactBlock],
}

fn messages(code: &str) -> Option<&'static str> {
    match code {
        "sent" => Some("Message sent! We'll get back to you within 24 hours."),
        "missing_fields" => Some("Please fill in your name, email, subject and message."),
        "invalid_email" => Some("Please enter a valid email address."),
        "unavailable" => Some("We couldn't send your message right now. Please try again."),
        _ => None,
    }
}

/// Display the contact page.
#[instrument(skip(state, shopper, flash))]
pub async fn page(
    State(state): State<AppState>,
    Visitor(shopper): Visitor,
    Query(flash): Query<MessageQuery>,
) -> impl IntoResponse {
    ContactTemplate {
        nav: NavView::for_visitor(shopper.as_deref()),
        flash: flash.resolve(messages),
        blocks: state.catalog().contact_blocks(),
    }
}

/// Handle a contact form submission.
#[instrument(skip(state, form))]
pub async fn submit(State(state): State<AppState>, Form(form): Form<ContactForm>) -> Redirect {
    if !form.email.trim().is_empty() && Email::parse(&form.email).is_err() {
        return Redirect::to("/contact?error=invalid_email");
    }

    let inquiry = Inquiry::from(form);
    match state.inquiry_service().submit(&inquiry).await {
        Ok(receipt) => {
            tracing::info!(reference = %receipt.reference, "Contact message received");
            Redirect::to("/contact?success=sent")
        }
        Err(InquiryError::Validation(missing)) => {
            tracing::debug!(%missing, "Contact message rejected");
            Redirect::to("/contact?error=missing_fields")
        }
        Err(err @ InquiryError::Unavailable(_)) => {
            tracing::warn!(error = %err, "Inquiry service unavailable");
            Redirect::to("/contact?error=unavailable")
        }
    }
}
