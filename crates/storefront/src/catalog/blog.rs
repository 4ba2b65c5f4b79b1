//! Blog post fixtures.

use chrono::NaiveDate;

use inkzaar_core::PostId;

/// Category value meaning "every post".
pub const ALL_POSTS: &str = "All";

pub(super) const CATEGORIES: [&str; 5] = [
    ALL_POSTS,
    "Technology",
    "Marketing",
    "Branding",
    "Sustainability",
];

/// A blog post teaser. The site has no post bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: PostId,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub image: &'static str,
    pub author: &'static str,
    pub published: NaiveDate,
    pub category: &'static str,
    pub read_time: &'static str,
}

impl BlogPost {
    /// Whether this post belongs to `category`. Blank or `All` matches every post.
    #[must_use]
    pub fn in_category(&self, category: &str) -> bool {
        let category = category.trim();
        category.is_empty()
            || category.eq_ignore_ascii_case(ALL_POSTS)
            || self.category.eq_ignore_ascii_case(category)
    }
}

fn post(
    id: &str,
    title: &'static str,
    excerpt: &'static str,
    author: &'static str,
    (y, m, d): (i32, u32, u32),
    category: &'static str,
    read_time: &'static str,
) -> Option<BlogPost> {
    Some(BlogPost {
        id: PostId::new(id),
        title,
        excerpt,
        image: "/placeholder.svg",
        author,
        published: NaiveDate::from_ymd_opt(y, m, d)?,
        category,
        read_time,
    })
}

pub(super) fn seed() -> Vec<BlogPost> {
    [
        post(
            "1",
            "The Future of Digital Printing: Trends to Watch in 2024",
            "Discover the latest innovations in digital printing technology and how they're \
             reshaping the industry.",
            "Sarah Johnson",
            (2024, 1, 15),
            "Technology",
            "5 min read",
        ),
        post(
            "2",
            "Influencer Marketing ROI: Measuring Success in Modern Campaigns",
            "Learn how to track and measure the effectiveness of your influencer marketing \
             campaigns.",
            "Mike Chen",
            (2024, 1, 12),
            "Marketing",
            "7 min read",
        ),
        post(
            "3",
            "Sustainable Printing Practices for Eco-Conscious Businesses",
            "Explore environmentally friendly printing options and how they benefit your \
             business.",
            "Emma Davis",
            (2024, 1, 10),
            "Sustainability",
            "6 min read",
        ),
        post(
            "4",
            "Building Brand Identity Through Consistent Print Materials",
            "Discover how cohesive print design strengthens your brand recognition and \
             customer loyalty.",
            "David Rodriguez",
            (2024, 1, 8),
            "Branding",
            "4 min read",
        ),
        post(
            "5",
            "The Rise of Micro-Influencers: Why Smaller Can Be Better",
            "Understanding the power of micro-influencers and how they can drive authentic \
             engagement.",
            "Lisa Wang",
            (2024, 1, 5),
            "Marketing",
            "8 min read",
        ),
        post(
            "6",
            "Print Quality vs. Speed: Finding the Perfect Balance",
            "Tips for optimizing your printing workflow without compromising on quality.",
            "Tom Wilson",
            (2024, 1, 3),
            "Technology",
            "5 min read",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}
