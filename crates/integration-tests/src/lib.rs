//! Integration tests for the Inkzaar storefront.
//!
//! Tests drive the real router in-process with `tower::ServiceExt::oneshot`;
//! no server or network is involved. [`TestClient`] carries the session
//! cookie between requests the way a browser would.
//!
//! ```rust,ignore
//! let mut client = TestClient::new();
//! let response = client.get("/cart/count").await;
//! assert_eq!(response.body, "0");
//! ```

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use tower::ServiceExt;

use inkzaar_storefront::config::{ServiceDelays, StorefrontConfig};
use inkzaar_storefront::routes;
use inkzaar_storefront::state::{AppState, Services};

/// Upper bound on response bodies read by tests.
const BODY_LIMIT: usize = 1024 * 1024;

/// Default configuration with every simulated delay set to zero.
///
/// # Panics
///
/// Never in practice: the defaults always parse.
#[must_use]
#[allow(clippy::missing_panics_doc)]
pub fn test_config() -> StorefrontConfig {
    let mut config = match StorefrontConfig::from_lookup(|_| None) {
        Ok(config) => config,
        Err(err) => panic!("default config should load: {err}"),
    };
    config.delays = ServiceDelays::none();
    config
}

/// A response with the body read into a string.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub hx_trigger: Option<String>,
    /// `name=value` part of any `Set-Cookie` header.
    pub set_cookie: Option<String>,
    pub body: String,
}

impl TestResponse {
    /// Whether the response is a redirect to exactly `target`.
    #[must_use]
    pub fn redirects_to(&self, target: &str) -> bool {
        self.status.is_redirection() && self.location.as_deref() == Some(target)
    }
}

/// An in-process browser: one router, one cookie jar holding the session.
///
/// Cloning gives a second tab of the same browser.
#[derive(Clone)]
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
}

impl TestClient {
    /// Client against a fresh app with zero-delay mock services.
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(AppState::new(test_config()))
    }

    /// Client against a fresh app with the given services.
    #[must_use]
    pub fn with_services(services: Services) -> Self {
        Self::with_state(AppState::with_services(test_config(), services))
    }

    /// Client against an existing state.
    #[must_use]
    pub fn with_state(state: AppState) -> Self {
        Self {
            app: routes::app(state),
            cookie: None,
        }
    }

    /// A second browser sharing this client's app but not its cookies.
    #[must_use]
    pub fn other_browser(&self) -> Self {
        Self {
            app: self.app.clone(),
            cookie: None,
        }
    }

    /// `GET path`.
    pub async fn get(&mut self, path: &str) -> TestResponse {
        self.send(Method::GET, path, None, false).await
    }

    /// `POST path` with a urlencoded form body.
    pub async fn post_form(&mut self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        self.send(Method::POST, path, Some(encode(fields)), false)
            .await
    }

    /// `POST path` as HTMX would send it.
    pub async fn post_htmx(&mut self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        self.send(Method::POST, path, Some(encode(fields)), true)
            .await
    }

    /// Sign in through the login form.
    pub async fn login(&mut self, email: &str, role: &str) -> TestResponse {
        self.post_form(
            "/login",
            &[("email", email), ("password", "password123"), ("role", role)],
        )
        .await
    }

    /// Add one unit of a product through the cart form.
    pub async fn add_to_cart(&mut self, id: &str) -> TestResponse {
        self.post_form("/cart/add", &[("id", id)]).await
    }

    async fn send(
        &mut self,
        method: Method,
        path: &str,
        form: Option<String>,
        htmx: bool,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        if htmx {
            builder = builder.header("HX-Request", "true");
        }
        let body = match form {
            Some(form) => {
                builder = builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
                Body::from(form)
            }
            None => Body::empty(),
        };

        let request = match builder.body(body) {
            Ok(request) => request,
            Err(err) => panic!("invalid test request: {err}"),
        };
        let response = match self.app.clone().oneshot(request).await {
            Ok(response) => response,
            Err(err) => match err {},
        };

        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(str::to_owned);
        if let Some(cookie) = &set_cookie {
            self.cookie = Some(cookie.clone());
        }

        let (status, location, hx_trigger) = {
            let header_string = |name: &str| {
                response
                    .headers()
                    .get(name)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_owned)
            };
            let status = response.status();
            let location = header_string(header::LOCATION.as_str());
            let hx_trigger = header_string("hx-trigger");
            (status, location, hx_trigger)
        };

        let bytes = match to_bytes(response.into_body(), BODY_LIMIT).await {
            Ok(bytes) => bytes,
            Err(err) => panic!("failed to read body: {err}"),
        };

        TestResponse {
            status,
            location,
            hx_trigger,
            set_cookie,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}

fn encode(fields: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish()
}
