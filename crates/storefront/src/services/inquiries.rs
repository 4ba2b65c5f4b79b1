//! Contact, collaboration and influencer sign-up submissions.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::instrument;
use uuid::Uuid;

use super::{MissingField, Simulation, require};

/// Errors that can occur when submitting an inquiry.
#[derive(Debug, Error)]
pub enum InquiryError {
    /// A required field was blank.
    #[error(transparent)]
    Validation(#[from] MissingField),

    /// The inquiry backend could not be reached.
    #[error("inquiry service unavailable: {0}")]
    Unavailable(String),
}

/// Message from the contact page.
#[derive(Debug, Clone, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

/// Brand collaboration request from the influencer hub.
#[derive(Debug, Clone, Default)]
pub struct CollaborationRequest {
    pub brand_name: String,
    pub description: String,
    pub budget: String,
    pub timeline: String,
    pub requirements: Option<String>,
}

/// Influencer programme application.
#[derive(Debug, Clone, Default)]
pub struct InfluencerApplication {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub followers: String,
    pub niche: String,
}

/// One of the site's inbound forms.
#[derive(Debug, Clone)]
pub enum Inquiry {
    Contact(ContactMessage),
    Collaboration(CollaborationRequest),
    InfluencerRegistration(InfluencerApplication),
}

impl Inquiry {
    /// Short name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Contact(_) => "contact",
            Self::Collaboration(_) => "collaboration",
            Self::InfluencerRegistration(_) => "influencer_registration",
        }
    }

    /// Presence checks on the required fields.
    ///
    /// # Errors
    ///
    /// Returns the first blank required field.
    pub fn validate(&self) -> Result<(), MissingField> {
        match self {
            Self::Contact(m) => {
                require("name", &m.name)?;
                require("email", &m.email)?;
                require("subject", &m.subject)?;
                require("message", &m.message)
            }
            Self::Collaboration(c) => {
                require("brand name", &c.brand_name)?;
                require("budget", &c.budget)?;
                require("description", &c.description)?;
                require("timeline", &c.timeline)
            }
            Self::InfluencerRegistration(a) => {
                require("name", &a.name)?;
                require("email", &a.email)?;
                require("phone", &a.phone)?;
                require("niche", &a.niche)?;
                require("followers", &a.followers)
            }
        }
    }
}

/// Acknowledgement of a stored inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InquiryReceipt {
    pub reference: Uuid,
    pub received_at: DateTime<Utc>,
}

/// Accepts inbound form submissions.
#[async_trait]
pub trait InquiryService: Send + Sync {
    /// Submit an inquiry.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for blank required fields and `Unavailable` if
    /// the backend cannot be reached.
    async fn submit(&self, inquiry: &Inquiry) -> Result<InquiryReceipt, InquiryError>;
}

/// Accepts every valid inquiry after a delay.
#[derive(Debug, Clone, Copy)]
pub struct MockInquiryService {
    sim: Simulation,
}

impl MockInquiryService {
    /// Succeed after `delay`.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            sim: Simulation::new(delay),
        }
    }

    /// Fail every valid request with `InquiryError::Unavailable`.
    #[must_use]
    pub const fn unavailable(self) -> Self {
        Self {
            sim: self.sim.unavailable(),
        }
    }
}

#[async_trait]
impl InquiryService for MockInquiryService {
    #[instrument(skip(self, inquiry), fields(kind = inquiry.kind()))]
    async fn submit(&self, inquiry: &Inquiry) -> Result<InquiryReceipt, InquiryError> {
        inquiry.validate()?;

        if !self.sim.round_trip().await {
            return Err(InquiryError::Unavailable("mock set unavailable".to_owned()));
        }

        let receipt = InquiryReceipt {
            reference: Uuid::new_v4(),
            received_at: Utc::now(),
        };
        tracing::info!(reference = %receipt.reference, "inquiry received");
        Ok(receipt)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn contact() -> ContactMessage {
        ContactMessage {
            name: "Ravi".into(),
            email: "ravi@example.com".into(),
            phone: None,
            subject: "Bulk order".into(),
            message: "Need 500 flyers".into(),
        }
    }

    #[tokio::test]
    async fn test_contact_without_phone_is_accepted() {
        let service = MockInquiryService::new(Duration::ZERO);
        let receipt = service.submit(&Inquiry::Contact(contact())).await;
        assert!(receipt.is_ok());
    }

    #[tokio::test]
    async fn test_collaboration_requires_budget_and_timeline() {
        let service = MockInquiryService::new(Duration::ZERO);
        let mut request = CollaborationRequest {
            brand_name: "Acme".into(),
            description: "Festive launch".into(),
            timeline: "4 weeks".into(),
            ..Default::default()
        };
        let err = service
            .submit(&Inquiry::Collaboration(request.clone()))
            .await
            .unwrap_err();
        assert!(matches!(err, InquiryError::Validation(MissingField("budget"))));

        request.budget = "50000".into();
        request.timeline = "  ".into();
        let inquiry = Inquiry::Collaboration(request.clone());
        assert_eq!(inquiry.validate(), Err(MissingField("timeline")));

        request.timeline = "4 weeks".into();
        assert!(service.submit(&Inquiry::Collaboration(request)).await.is_ok());
    }

    #[tokio::test]
    async fn test_registration_requires_phone_niche_and_followers() {
        let mut application = InfluencerApplication {
            name: "Meera".into(),
            email: "meera@example.com".into(),
            niche: "Travel".into(),
            followers: "12k".into(),
            ..Default::default()
        };
        let inquiry = Inquiry::InfluencerRegistration(application.clone());
        assert_eq!(inquiry.validate(), Err(MissingField("phone")));
        assert_eq!(inquiry.kind(), "influencer_registration");

        application.phone = "9876543210".into();
        application.followers = String::new();
        let inquiry = Inquiry::InfluencerRegistration(application.clone());
        assert_eq!(inquiry.validate(), Err(MissingField("followers")));

        application.followers = "12k".into();
        let inquiry = Inquiry::InfluencerRegistration(application);
        assert!(inquiry.validate().is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unavailable_after_delay() {
        let service = MockInquiryService::new(Duration::from_millis(1000)).unavailable();
        let err = service.submit(&Inquiry::Contact(contact())).await.unwrap_err();
        assert!(matches!(err, InquiryError::Unavailable(_)));
    }
}
