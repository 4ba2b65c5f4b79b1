//! Static fixture content for the site.
//!
//! Everything here is built once at startup by [`Catalog::seeded`] and
//! shared read-only through `AppState`. Records carry stable string IDs.

mod blog;
mod dashboard;
mod influencer;
mod products;
mod site;

pub use blog::{ALL_POSTS, BlogPost};
pub use dashboard::{Activity, AdminStat, OrderRecord, Quotation};
pub use influencer::{InfluencerStats, Tier};
pub use products::{ALL_CATEGORIES, Product, ProductCategory, ProductQuery};
pub use site::{ContactBlock, Highlight, Service, Stat};

use inkzaar_core::ProductId;

/// In-memory content store.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    posts: Vec<BlogPost>,
    services: Vec<Service>,
    order_history: Vec<OrderRecord>,
    quotations: Vec<Quotation>,
}

impl Catalog {
    /// Build the catalog from the built-in fixtures.
    #[must_use]
    pub fn seeded() -> Self {
        let catalog = Self {
            products: products::seed(),
            posts: blog::seed(),
            services: site::seed_services(),
            order_history: dashboard::seed_orders(),
            quotations: dashboard::seed_quotations(),
        };
        tracing::info!(
            products = catalog.products.len(),
            posts = catalog.posts.len(),
            services = catalog.services.len(),
            "Loaded catalog"
        );
        catalog
    }

    // =========================================================================
    // Products
    // =========================================================================

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products matching a search term and category, in catalog order.
    pub fn search<'a>(
        &'a self,
        query: &ProductQuery<'_>,
    ) -> impl Iterator<Item = &'a Product> + use<'a> {
        products::filter(&self.products, query)
    }

    /// First `limit` products, for the home page.
    pub fn featured(&self, limit: usize) -> impl Iterator<Item = &Product> {
        self.products.iter().take(limit)
    }

    #[must_use]
    pub const fn product_categories(&self) -> &'static [ProductCategory] {
        &products::CATEGORIES
    }

    // =========================================================================
    // Blog
    // =========================================================================

    pub fn posts_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a BlogPost> {
        self.posts.iter().filter(move |p| p.in_category(category))
    }

    #[must_use]
    pub const fn blog_categories(&self) -> &'static [&'static str] {
        &blog::CATEGORIES
    }

    // =========================================================================
    // Services and marketing copy
    // =========================================================================

    #[must_use]
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    #[must_use]
    pub const fn hero_slides(&self) -> &'static [Highlight] {
        &site::HERO_SLIDES
    }

    #[must_use]
    pub const fn home_features(&self) -> &'static [Highlight] {
        &site::HOME_FEATURES
    }

    #[must_use]
    pub const fn home_stats(&self) -> &'static [Stat] {
        &site::HOME_STATS
    }

    #[must_use]
    pub const fn about_stats(&self) -> &'static [Stat] {
        &site::ABOUT_STATS
    }

    #[must_use]
    pub const fn about_values(&self) -> &'static [Highlight] {
        &site::ABOUT_VALUES
    }

    #[must_use]
    pub const fn contact_blocks(&self) -> &'static [ContactBlock] {
        &site::CONTACT
    }

    // =========================================================================
    // Influencer programme
    // =========================================================================

    #[must_use]
    pub const fn influencer_stats(&self) -> InfluencerStats {
        influencer::STATS
    }

    #[must_use]
    pub const fn influencer_highlights(&self) -> &'static [Stat] {
        &site::INFLUENCER_STATS
    }

    #[must_use]
    pub const fn influencer_steps(&self) -> &'static [Highlight] {
        &site::INFLUENCER_STEPS
    }

    // =========================================================================
    // Dashboards
    // =========================================================================

    #[must_use]
    pub fn order_history(&self) -> &[OrderRecord] {
        &self.order_history
    }

    #[must_use]
    pub fn quotations(&self) -> &[Quotation] {
        &self.quotations
    }

    #[must_use]
    pub const fn admin_stats(&self) -> &'static [AdminStat] {
        &dashboard::ADMIN_STATS
    }

    #[must_use]
    pub const fn admin_actions(&self) -> &'static [&'static str] {
        &dashboard::ADMIN_ACTIONS
    }

    #[must_use]
    pub const fn recent_activity(&self) -> &'static [Activity] {
        &dashboard::RECENT_ACTIVITY
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let catalog = Catalog::seeded();
        let products: HashSet<_> = catalog.products().map(|p| &p.id).collect();
        assert_eq!(products.len(), 6);
        let services: HashSet<_> = catalog.services().iter().map(|s| &s.id).collect();
        assert_eq!(services.len(), catalog.services().len());
    }

    #[test]
    fn test_product_lookup() {
        let catalog = Catalog::seeded();
        let standee = catalog.product(&ProductId::new("6"));
        assert_eq!(standee.map(|p| p.name), Some("Roll-up Standees"));
        assert!(catalog.product(&ProductId::new("99")).is_none());
    }

    #[test]
    fn test_every_product_category_is_listed() {
        let catalog = Catalog::seeded();
        let slugs: HashSet<_> = catalog.product_categories().iter().map(|c| c.slug).collect();
        assert!(catalog.products().all(|p| slugs.contains(p.category)));
    }

    #[test]
    fn test_featured_takes_first_products() {
        let catalog = Catalog::seeded();
        let ids: Vec<_> = catalog.featured(3).map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }
}
