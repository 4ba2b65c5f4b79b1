//! Print product fixtures and catalog search.

use inkzaar_core::{ProductId, Rupees};

/// A product category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductCategory {
    /// Query-string value (`business`, `banners`, ...). `all` disables the filter.
    pub slug: &'static str,
    pub name: &'static str,
}

/// Category slug meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

pub(super) const CATEGORIES: [ProductCategory; 6] = [
    ProductCategory {
        slug: ALL_CATEGORIES,
        name: "All Products",
    },
    ProductCategory {
        slug: "business",
        name: "Business Cards",
    },
    ProductCategory {
        slug: "banners",
        name: "Banners & Standees",
    },
    ProductCategory {
        slug: "brochures",
        name: "Brochures & Flyers",
    },
    ProductCategory {
        slug: "apparel",
        name: "T-Shirts & Apparel",
    },
    ProductCategory {
        slug: "promotional",
        name: "Promotional Items",
    },
];

/// A printable product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: &'static str,
    pub price: Rupees,
    pub original_price: Rupees,
    pub image: &'static str,
    pub category: &'static str,
    pub rating: f32,
    pub reviews: u32,
    /// One-line summary shown on listing cards.
    pub summary: &'static str,
    /// Longer copy shown on the detail page.
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub specifications: &'static [(&'static str, &'static str)],
}

impl Product {
    /// Percentage off the original price, rounded to the nearest whole percent.
    #[must_use]
    pub fn discount_percent(&self) -> u64 {
        let original = self.original_price.get();
        if original == 0 || self.price >= self.original_price {
            return 0;
        }
        let off = original - self.price.get();
        (off * 100 + original / 2) / original
    }

    /// Case-insensitive substring match on name or summary. `needle` must
    /// already be lowercase.
    fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.summary.to_lowercase().contains(needle)
    }

    fn in_category(&self, category: &str) -> bool {
        category.is_empty() || category == ALL_CATEGORIES || self.category == category
    }
}

/// Listing filter from the products page query string.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery<'a> {
    pub search: &'a str,
    pub category: &'a str,
}

pub(super) fn filter<'a>(
    products: &'a [Product],
    query: &ProductQuery<'_>,
) -> impl Iterator<Item = &'a Product> + use<'a> {
    let needle = query.search.trim().to_lowercase();
    let category = query.category.trim().to_owned();
    products
        .iter()
        .filter(move |p| p.matches_search(&needle) && p.in_category(&category))
}

const PLACEHOLDER: &str = "/placeholder.svg";

pub(super) fn seed() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Premium Business Cards",
            price: Rupees::new(299),
            original_price: Rupees::new(399),
            image: PLACEHOLDER,
            category: "business",
            rating: 4.8,
            reviews: 124,
            summary: "High-quality matte finish business cards",
            description: "High-quality matte finish business cards perfect for professional \
                          networking and brand representation.",
            features: &[
                "350 GSM Paper",
                "Matte Lamination",
                "100 Cards",
                "Double-sided printing",
            ],
            specifications: &[
                ("Paper Weight", "350 GSM"),
                ("Finish", "Matte Lamination"),
                ("Size", "3.5\" x 2\""),
                ("Quantity", "100 pieces"),
                ("Printing", "Full color both sides"),
            ],
        },
        Product {
            id: ProductId::new("2"),
            name: "Flex Banner Printing",
            price: Rupees::new(1499),
            original_price: Rupees::new(1799),
            image: PLACEHOLDER,
            category: "banners",
            rating: 4.9,
            reviews: 89,
            summary: "Weather-resistant flex banners",
            description: "Weather-resistant flex banners for shop fronts, events and \
                          outdoor promotions, printed in high definition.",
            features: &["HD Printing", "UV Resistant", "Custom Size"],
            specifications: &[
                ("Material", "Star flex"),
                ("Finish", "UV resistant ink"),
                ("Size", "Custom"),
                ("Eyelets", "Included on request"),
            ],
        },
        Product {
            id: ProductId::new("3"),
            name: "Tri-fold Brochures",
            price: Rupees::new(799),
            original_price: Rupees::new(999),
            image: PLACEHOLDER,
            category: "brochures",
            rating: 4.7,
            reviews: 67,
            summary: "Professional tri-fold brochures",
            description: "Professional tri-fold brochures on art paper, ideal for menus, \
                          product sheets and service overviews.",
            features: &["Art Paper", "Full Color", "100 Pieces"],
            specifications: &[
                ("Paper", "170 GSM art paper"),
                ("Size", "A4, folded to DL"),
                ("Quantity", "100 pieces"),
                ("Printing", "Full color both sides"),
            ],
        },
        Product {
            id: ProductId::new("4"),
            name: "Custom T-Shirt Printing",
            price: Rupees::new(499),
            original_price: Rupees::new(699),
            image: PLACEHOLDER,
            category: "apparel",
            rating: 4.6,
            reviews: 156,
            summary: "Premium cotton t-shirts with custom prints",
            description: "Premium cotton t-shirts with custom prints for teams, events \
                          and merchandise.",
            features: &["100% Cotton", "HD Vinyl Print", "All Sizes"],
            specifications: &[
                ("Fabric", "100% cotton, 180 GSM"),
                ("Print", "HD vinyl"),
                ("Sizes", "S to XXL"),
            ],
        },
        Product {
            id: ProductId::new("5"),
            name: "Promotional Keychains",
            price: Rupees::new(199),
            original_price: Rupees::new(299),
            image: PLACEHOLDER,
            category: "promotional",
            rating: 4.5,
            reviews: 203,
            summary: "Custom branded keychains",
            description: "Custom branded metal keychains with laser engraving, available \
                          for bulk corporate orders.",
            features: &["Metal Finish", "Laser Engraving", "Bulk Orders"],
            specifications: &[
                ("Material", "Zinc alloy"),
                ("Branding", "Laser engraving"),
                ("Minimum order", "50 pieces"),
            ],
        },
        Product {
            id: ProductId::new("6"),
            name: "Roll-up Standees",
            price: Rupees::new(2999),
            original_price: Rupees::new(3499),
            image: PLACEHOLDER,
            category: "banners",
            rating: 4.8,
            reviews: 45,
            summary: "Portable roll-up display standees",
            description: "Portable roll-up display standees with an aluminium base and \
                          carrying case for exhibitions and retail.",
            features: &["Aluminum Base", "Retractable", "Carrying Case"],
            specifications: &[
                ("Size", "6 ft x 3 ft"),
                ("Base", "Aluminium, retractable"),
                ("Includes", "Carrying case"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(query: &ProductQuery<'_>) -> Vec<String> {
        let products = seed();
        filter(&products, query)
            .map(|p| p.id.to_string())
            .collect()
    }

    #[test]
    fn test_empty_query_lists_everything() {
        assert_eq!(ids(&ProductQuery::default()).len(), 6);
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_and_summary() {
        let by_name = ProductQuery {
            search: "BANNER",
            category: ALL_CATEGORIES,
        };
        assert_eq!(ids(&by_name), vec!["2"]);

        let by_summary = ProductQuery {
            search: "cotton",
            ..Default::default()
        };
        assert_eq!(ids(&by_summary), vec!["4"]);
    }

    #[test]
    fn test_category_filter_combines_with_search() {
        let banners = ProductQuery {
            search: "",
            category: "banners",
        };
        assert_eq!(ids(&banners), vec!["2", "6"]);

        let none = ProductQuery {
            search: "keychain",
            category: "banners",
        };
        assert!(ids(&none).is_empty());
    }

    #[test]
    fn test_discount_percent() {
        let products = seed();
        let discounts: Vec<u64> = products.iter().map(Product::discount_percent).collect();
        assert_eq!(discounts, vec![25, 17, 20, 29, 33, 14]);
    }
}
