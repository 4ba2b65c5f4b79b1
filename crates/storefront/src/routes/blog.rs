//! Blog route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use super::NavView;
use crate::catalog::{ALL_POSTS, BlogPost};
use crate::filters;
use crate::middleware::Visitor;
use crate::state::AppState;

/// Post teaser view for templates.
#[derive(Debug, Clone)]
pub struct PostView {
    pub id: String,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub image: &'static str,
    pub author: &'static str,
    pub published: String,
    pub category: &'static str,
    pub read_time: &'static str,
}

impl From<&BlogPost> for PostView {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title,
            excerpt: post.excerpt,
            image: post.image,
            author: post.author,
            published: post.published.format("%B %-d, %Y").to_string(),
            category: post.category,
            read_time: post.read_time,
        }
    }
}

/// Category filter button.
#[derive(Debug, Clone)]
pub struct BlogCategoryView {
    pub name: &'static str,
    pub selected: bool,
}

/// Blog listing query.
#[derive(Debug, Default, Deserialize)]
pub struct BlogQuery {
    pub category: Option<String>,
}

/// Blog index page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/blog.html")]
pub struct BlogIndexTemplate {
    pub nav: NavView,
    pub categories: Vec<BlogCategoryView>,
    /// First post in the selection, shown large.
    pub featured: Option<PostView>,
    pub posts: Vec<PostView>,
}

/// Display the blog listing, optionally filtered by category.
#[instrument(skip(state, shopper))]
pub async fn index(
    State(state): State<AppState>,
    Visitor(shopper): Visitor,
    Query(query): Query<BlogQuery>,
) -> impl IntoResponse {
    let catalog = state.catalog();
    let selected = query.category.as_deref().unwrap_or(ALL_POSTS);

    let mut posts = catalog.posts_in(selected).map(PostView::from);
    let featured = posts.next();
    let posts = posts.collect();

    BlogIndexTemplate {
        nav: NavView::for_visitor(shopper.as_deref()),
        categories: catalog
            .blog_categories()
            .iter()
            .map(|&name| BlogCategoryView {
                name,
                selected: name.eq_ignore_ascii_case(selected.trim())
                    || (name == ALL_POSTS && selected.trim().is_empty()),
            })
            .collect(),
        featured,
        posts,
    }
}
