//! Public pages, catalog browsing and the inbound forms.

use axum::http::StatusCode;
use inkzaar_integration_tests::TestClient;

#[tokio::test]
async fn test_health() {
    let mut client = TestClient::new();

    let response = client.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "ok");
}

#[tokio::test]
async fn test_public_pages_render() {
    let mut client = TestClient::new();
    let paths = [
        "/",
        "/about",
        "/services",
        "/blog",
        "/products",
        "/influencer",
        "/contact",
        "/login",
        "/cart",
    ];
    for path in paths {
        let response = client.get(path).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
    }
}

#[tokio::test]
async fn test_home_shows_featured_products_and_tiers() {
    let mut client = TestClient::new();

    let page = client.get("/").await;

    assert!(page.body.contains("Premium Business Cards"));
    assert!(page.body.contains("Digital Printing"));
    assert!(page.body.contains("Gold"));
}

#[tokio::test]
async fn test_product_search_and_category() {
    let mut client = TestClient::new();

    let page = client.get("/products?q=banner").await;
    assert!(page.body.contains("Flex Banner Printing"));
    assert!(!page.body.contains("Premium Business Cards"));

    let page = client.get("/products?category=business").await;
    assert!(page.body.contains("Premium Business Cards"));
    assert!(!page.body.contains("Tri-fold Brochures"));

    let page = client.get("/products?q=zzzz").await;
    assert!(page.body.contains("No products match your search."));
}

#[tokio::test]
async fn test_product_detail_and_missing_product() {
    let mut client = TestClient::new();

    let page = client.get("/products/1").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Premium Business Cards"));
    assert!(page.body.contains("25% OFF"));

    let missing = client.get("/products/99").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_flash_code_is_not_echoed() {
    let mut client = TestClient::new();

    let page = client.get("/products?error=%3Cscript%3Ealert(1)%3C%2Fscript%3E").await;

    assert!(!page.body.contains("alert(1)"));
}

#[tokio::test]
async fn test_blog_category_filter() {
    let mut client = TestClient::new();

    let page = client.get("/blog?category=Marketing").await;

    assert!(page.body.contains("Influencer Marketing ROI"));
    assert!(page.body.contains("The Rise of Micro-Influencers"));
    assert!(!page.body.contains("Sustainable Printing Practices"));
}

#[tokio::test]
async fn test_contact_form() {
    let mut client = TestClient::new();

    let response = client
        .post_form(
            "/contact",
            &[
                ("name", "Asha"),
                ("email", "asha@example.com"),
                ("subject", "Banner quote"),
                ("message", "Need 3 banners"),
            ],
        )
        .await;
    assert!(response.redirects_to("/contact?success=sent"));

    let response = client
        .post_form("/contact", &[("name", "Asha"), ("email", "asha@example.com")])
        .await;
    assert!(response.redirects_to("/contact?error=missing_fields"));

    let response = client
        .post_form(
            "/contact",
            &[
                ("name", "Asha"),
                ("email", "asha"),
                ("subject", "Hi"),
                ("message", "Hello"),
            ],
        )
        .await;
    assert!(response.redirects_to("/contact?error=invalid_email"));
}

#[tokio::test]
async fn test_influencer_forms() {
    let mut client = TestClient::new();

    let response = client
        .post_form(
            "/influencer/collaborate",
            &[("brand_name", "Acme"), ("description", "Festive launch"), ("budget", "")],
        )
        .await;
    assert!(response.redirects_to("/influencer?error=missing_fields"));

    let response = client
        .post_form(
            "/influencer/collaborate",
            &[
                ("brand_name", "Acme"),
                ("description", "Festive launch"),
                ("budget", "50000"),
                ("timeline", "4 weeks"),
            ],
        )
        .await;
    assert!(response.redirects_to("/influencer?success=collaboration_sent"));

    let registration = [
        ("name", "Riya"),
        ("email", "riya@example.com"),
        ("phone", "9876543210"),
        ("facebook", "riya.creates"),
        ("twitter", "@riya"),
        ("followers", "25k"),
        ("niche", "Fashion"),
    ];
    let response = client.post_form("/influencer/register", &registration).await;
    assert!(response.redirects_to("/influencer?success=registered"));

    let without_phone: Vec<_> = registration
        .into_iter()
        .filter(|(field, _)| *field != "phone")
        .collect();
    let response = client.post_form("/influencer/register", &without_phone).await;
    assert!(response.redirects_to("/influencer?error=missing_fields"));
}
