//! Marketing copy for the home, about, services and contact pages.

use inkzaar_core::ServiceId;

/// A service line offered by the studio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub id: ServiceId,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

/// Headline + supporting line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub text: &'static str,
}

/// Big number with a caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// One block on the contact page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactBlock {
    pub title: &'static str,
    pub details: &'static [&'static str],
}

pub(super) fn seed_services() -> Vec<Service> {
    [
        (
            "digital-printing",
            "Digital Printing",
            "High-quality digital printing for all your business needs",
            &["HD Quality", "Fast Turnaround", "Bulk Orders"] as &'static [&'static str],
        ),
        (
            "large-format",
            "Large Format Printing",
            "Banners, posters, and signage in any size",
            &["Weather Resistant", "Custom Sizes", "UV Protection"],
        ),
        (
            "apparel",
            "Apparel Printing",
            "Custom t-shirts, uniforms, and promotional wear",
            &["Various Materials", "Bulk Discounts", "Design Support"],
        ),
        (
            "marketing-materials",
            "Marketing Materials",
            "Brochures, flyers, and promotional materials",
            &["Creative Design", "Quality Paper", "Fast Delivery"],
        ),
        (
            "corporate-branding",
            "Corporate Branding",
            "Complete branding solutions for businesses",
            &["Logo Design", "Brand Guidelines", "Print Materials"],
        ),
        (
            "event-marketing",
            "Event Marketing",
            "Event banners, standees, and promotional items",
            &["Event Planning", "On-site Setup", "Bulk Orders"],
        ),
    ]
    .into_iter()
    .map(|(id, title, description, features)| Service {
        id: ServiceId::new(id),
        title,
        description,
        features,
    })
    .collect()
}

pub(super) const HERO_SLIDES: [Highlight; 3] = [
    Highlight {
        title: "Professional Printing Solutions",
        text: "Transform your ideas into reality with our premium printing services",
    },
    Highlight {
        title: "Influencer Marketing Made Easy",
        text: "Connect with top influencers and grow your brand exponentially",
    },
    Highlight {
        title: "Custom Advertising Solutions",
        text: "From concept to completion, we deliver advertising that works",
    },
];

pub(super) const HOME_FEATURES: [Highlight; 3] = [
    Highlight {
        title: "Premium Products",
        text: "High-quality printing materials and professional finishes",
    },
    Highlight {
        title: "Custom Services",
        text: "Tailored solutions for all your advertising needs",
    },
    Highlight {
        title: "Influencer Network",
        text: "Connect with verified influencers across all platforms",
    },
];

pub(super) const HOME_STATS: [Stat; 4] = [
    Stat {
        value: "500+",
        label: "Happy Clients",
    },
    Stat {
        value: "10k+",
        label: "Products Delivered",
    },
    Stat {
        value: "50+",
        label: "Influencer Partners",
    },
    Stat {
        value: "99%",
        label: "Client Satisfaction",
    },
];

pub(super) const ABOUT_STATS: [Stat; 4] = [
    Stat {
        value: "500+",
        label: "Happy Clients",
    },
    Stat {
        value: "10+",
        label: "Years Experience",
    },
    Stat {
        value: "1000+",
        label: "Projects Completed",
    },
    Stat {
        value: "25+",
        label: "Team Members",
    },
];

pub(super) const ABOUT_VALUES: [Highlight; 4] = [
    Highlight {
        title: "Quality First",
        text: "We never compromise on quality, ensuring every project meets the highest standards.",
    },
    Highlight {
        title: "Customer Focused",
        text: "Our clients are at the heart of everything we do, \
               driving our commitment to excellence.",
    },
    Highlight {
        title: "Innovation",
        text: "We embrace new technologies and creative solutions to stay ahead of the curve.",
    },
    Highlight {
        title: "Reliability",
        text: "You can count on us to deliver on time, every time, with consistent quality.",
    },
];

pub(super) const INFLUENCER_STATS: [Stat; 3] = [
    Stat {
        value: "500+",
        label: "Influencers",
    },
    Stat {
        value: "1000+",
        label: "Campaigns",
    },
    Stat {
        value: "98%",
        label: "Success Rate",
    },
];

pub(super) const INFLUENCER_STEPS: [Highlight; 3] = [
    Highlight {
        title: "Submit Request",
        text: "Tell us about your brand and campaign goals",
    },
    Highlight {
        title: "Get Matched",
        text: "We connect you with influencers that fit your audience",
    },
    Highlight {
        title: "Launch Campaign",
        text: "Go live and track performance together",
    },
];

pub(super) const CONTACT: [ContactBlock; 4] = [
    ContactBlock {
        title: "Address",
        details: &["123 Business Street", "Mumbai, Maharashtra 400001"],
    },
    ContactBlock {
        title: "Phone",
        details: &["+91 98765 43210", "+91 87654 32109"],
    },
    ContactBlock {
        title: "Email",
        details: &["info@inkzaar.com", "support@inkzaar.com"],
    },
    ContactBlock {
        title: "Business Hours",
        details: &["Mon - Fri: 9:00 AM - 6:00 PM", "Sat: 9:00 AM - 2:00 PM"],
    },
];
