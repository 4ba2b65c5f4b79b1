//! Cart flows: adding, the badge fragment, quantities and the summary.

use axum::http::StatusCode;
use inkzaar_integration_tests::TestClient;

async fn badge(client: &mut TestClient) -> String {
    let response = client.get("/cart/count").await;
    assert_eq!(response.status, StatusCode::OK);
    response.body
}

#[tokio::test]
async fn test_new_browser_starts_with_empty_cart() {
    let mut client = TestClient::new();
    assert!(badge(&mut client).await.contains(">0<"));
}

#[tokio::test]
async fn test_adding_updates_badge_count() {
    let mut client = TestClient::new();

    let response = client.add_to_cart("1").await;
    assert!(response.redirects_to("/products?success=added"));
    client.add_to_cart("1").await;
    client.add_to_cart("2").await;

    assert!(badge(&mut client).await.contains(">3<"));
}

#[tokio::test]
async fn test_htmx_add_returns_badge_fragment() {
    let mut client = TestClient::new();

    let response = client.post_htmx("/cart/add", &[("id", "3")]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.hx_trigger.as_deref(), Some("cart-updated"));
    assert!(response.body.contains(">1<"));
}

#[tokio::test]
async fn test_add_quantity_returns_to_product_page() {
    let mut client = TestClient::new();

    let response = client
        .post_form(
            "/cart/add",
            &[("id", "2"), ("quantity", "3"), ("redirect", "/products/2")],
        )
        .await;

    assert!(response.redirects_to("/products/2?success=added"));
    assert!(badge(&mut client).await.contains(">3<"));
}

#[tokio::test]
async fn test_offsite_redirect_is_ignored() {
    let mut client = TestClient::new();

    let response = client
        .post_form("/cart/add", &[("id", "1"), ("redirect", "//evil.example")])
        .await;

    assert!(response.redirects_to("/products?success=added"));
}

#[tokio::test]
async fn test_unknown_product_is_not_added() {
    let mut client = TestClient::new();

    let response = client.add_to_cart("99").await;

    assert!(response.redirects_to("/products?error=unknown_product"));
    assert!(badge(&mut client).await.contains(">0<"));
}

#[tokio::test]
async fn test_cart_page_shows_gst_summary() {
    let mut client = TestClient::new();
    client.add_to_cart("1").await;
    client.add_to_cart("1").await;

    let page = client.get("/cart").await;

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Premium Business Cards"));
    assert!(page.body.contains("₹598"));
    assert!(page.body.contains("₹108"));
    assert!(page.body.contains("₹706"));
    assert!(page.body.contains("Free"));
}

#[tokio::test]
async fn test_update_to_zero_removes_line() {
    let mut client = TestClient::new();
    client.add_to_cart("1").await;
    client.add_to_cart("2").await;

    let response = client
        .post_form("/cart/update", &[("id", "1"), ("quantity", "0")])
        .await;
    assert!(response.redirects_to("/cart?success=updated"));

    let page = client.get("/cart").await;
    assert!(!page.body.contains("Premium Business Cards"));
    assert!(page.body.contains("Flex Banner Printing"));
}

#[tokio::test]
async fn test_update_sets_quantity() {
    let mut client = TestClient::new();
    client.add_to_cart("5").await;

    client
        .post_form("/cart/update", &[("id", "5"), ("quantity", "12")])
        .await;

    assert!(badge(&mut client).await.contains(">12<"));
}

#[tokio::test]
async fn test_remove_and_clear() {
    let mut client = TestClient::new();
    client.add_to_cart("1").await;
    client.add_to_cart("2").await;

    let response = client.post_form("/cart/remove", &[("id", "1")]).await;
    assert!(response.redirects_to("/cart?success=removed"));
    assert!(badge(&mut client).await.contains(">1<"));

    let response = client.post_form("/cart/clear", &[]).await;
    assert!(response.redirects_to("/cart?success=cleared"));

    let page = client.get("/cart").await;
    assert!(page.body.contains("Your cart is empty"));
}

#[tokio::test]
async fn test_browsers_have_separate_carts() {
    let mut first = TestClient::new();
    let mut second = first.other_browser();

    first.add_to_cart("1").await;
    first.add_to_cart("1").await;
    second.add_to_cart("4").await;

    assert!(badge(&mut first).await.contains(">2<"));
    assert!(badge(&mut second).await.contains(">1<"));
}
