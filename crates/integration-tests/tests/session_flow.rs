//! Session cookies: only state-changing requests start a session.

use axum::http::StatusCode;
use inkzaar_integration_tests::TestClient;

#[tokio::test]
async fn test_cookieless_page_views_leave_no_session() {
    let client = TestClient::new();

    for path in ["/about", "/about", "/", "/products", "/cart", "/cart/count", "/login"] {
        let mut crawler = client.other_browser();
        let response = crawler.get(path).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert!(response.set_cookie.is_none(), "{path} set a cookie");
    }
}

#[tokio::test]
async fn test_protected_pages_redirect_without_a_session() {
    let mut client = TestClient::new();

    let response = client.get("/dashboard").await;
    assert!(response.redirects_to("/login"));
    assert!(response.set_cookie.is_none());

    let response = client.get("/admin").await;
    assert!(response.redirects_to("/login?role=admin"));
}

#[tokio::test]
async fn test_adding_to_cart_starts_a_session() {
    let mut client = TestClient::new();

    let response = client.add_to_cart("4").await;
    assert!(response.set_cookie.is_some());

    let page = client.get("/about").await;
    assert!(page.body.contains(r#"id="cart-count">1<"#));
}

#[tokio::test]
async fn test_cart_edits_without_a_session_are_noops() {
    let mut client = TestClient::new();

    let response = client.post_form("/cart/remove", &[("id", "1")]).await;
    assert!(response.redirects_to("/cart?success=removed"));
    assert!(response.set_cookie.is_none());

    let response = client.post_form("/logout", &[]).await;
    assert!(response.redirects_to("/login?success=signed_out"));
}
