//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use inkzaar_core::ProductId;

use super::{Flash, MessageQuery, NavView};
use crate::catalog::{ALL_CATEGORIES, Product, ProductQuery};
use crate::error::AppError;
use crate::filters;
use crate::middleware::Visitor;
use crate::state::AppState;

// =============================================================================
// View Types
// =============================================================================

/// Product card display data for templates.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    pub id: String,
    pub name: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
    pub price: String,
    pub original_price: String,
    pub discount_percent: u64,
    pub rating: f32,
    pub reviews: u32,
    pub features: &'static [&'static str],
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            summary: product.summary,
            image: product.image,
            price: product.price.to_string(),
            original_price: product.original_price.to_string(),
            discount_percent: product.discount_percent(),
            rating: product.rating,
            reviews: product.reviews,
            features: product.features,
        }
    }
}

/// Category filter button.
#[derive(Debug, Clone)]
pub struct CategoryView {
    pub slug: &'static str,
    pub name: &'static str,
    pub selected: bool,
}

/// Product detail display data.
#[derive(Debug, Clone)]
pub struct ProductDetailView {
    pub card: ProductCardView,
    pub description: &'static str,
    pub specifications: &'static [(&'static str, &'static str)],
}

// =============================================================================
// Query Types
// =============================================================================

/// Catalog listing query.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub category: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Product listing template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub nav: NavView,
    pub flash: Flash,
    pub query: String,
    pub selected_category: String,
    pub categories: Vec<CategoryView>,
    pub products: Vec<ProductCardView>,
}

/// Product detail template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub nav: NavView,
    pub flash: Flash,
    pub product: ProductDetailView,
}

/// Messages for `?success=` / `?error=` codes on product pages.
pub(super) fn messages(code: &str) -> Option<&'static str> {
    match code {
        "added" => Some("Added to cart!"),
        "unknown_product" => Some("That product is no longer available."),
        _ => None,
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the product catalog, filtered by search term and category.
#[instrument(skip(state, shopper, flash))]
pub async fn index(
    State(state): State<AppState>,
    Visitor(shopper): Visitor,
    Query(query): Query<ListingQuery>,
    Query(flash): Query<MessageQuery>,
) -> impl IntoResponse {
    let selected = if query.category.trim().is_empty() {
        ALL_CATEGORIES.to_string()
    } else {
        query.category.trim().to_string()
    };

    let products = state
        .catalog()
        .search(&ProductQuery {
            search: &query.q,
            category: &selected,
        })
        .map(ProductCardView::from)
        .collect();

    let categories = state
        .catalog()
        .product_categories()
        .iter()
        .map(|c| CategoryView {
            slug: c.slug,
            name: c.name,
            selected: c.slug == selected,
        })
        .collect();

    ProductsIndexTemplate {
        nav: NavView::for_visitor(shopper.as_deref()),
        flash: flash.resolve(messages),
        query: query.q,
        selected_category: selected,
        categories,
        products,
    }
}

/// Display a single product.
#[instrument(skip(state, shopper, flash))]
pub async fn show(
    State(state): State<AppState>,
    Visitor(shopper): Visitor,
    Path(id): Path<String>,
    Query(flash): Query<MessageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let product = state
        .catalog()
        .product(&ProductId::new(id.as_str()))
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(ProductShowTemplate {
        nav: NavView::for_visitor(shopper.as_deref()),
        flash: flash.resolve(messages),
        product: ProductDetailView {
            card: ProductCardView::from(product),
            description: product.description,
            specifications: product.specifications,
        },
    })
}
