//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                                - Health check
//!
//! # Auth
//! POST   /api/auth/login                        - Demo login
//! POST   /api/auth/register                     - Demo registration
//!
//! # Catalog
//! GET    /api/restaurants                       - Search restaurants (query string filters)
//! GET    /api/restaurants/{id}                  - Restaurant detail
//! GET    /api/restaurants/{id}/menu             - Restaurant menu
//! GET    /api/addresses                         - Saved delivery addresses
//!
//! # Checkout (session cookie)
//! GET    /api/checkout                          - Current checkout view
//! GET    /api/checkout/summary                  - Pricing summary
//! POST   /api/checkout/items                    - Add a menu item
//! PUT    /api/checkout/items/{id}/quantity      - Set a line's quantity
//! PUT    /api/checkout/items/{id}/instructions  - Set a line's special instructions
//! DELETE /api/checkout/items/{id}               - Remove a line
//! PUT    /api/checkout/note                     - Set the order note
//! PUT    /api/checkout/address                  - Select the delivery address
//! PUT    /api/checkout/payment                  - Select the payment method
//! POST   /api/checkout/advance                  - Continue to the next step
//! POST   /api/checkout/back                     - Previous step, or leave checkout
//! POST   /api/checkout/submit                   - Place the order
//! ```

pub mod auth;
pub mod checkout;
pub mod restaurants;

use std::time::Duration;

use axum::{
    Router,
    http::{Request, Response},
    middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::{
    create_session_layer, request_id_middleware, security_headers_middleware,
};
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
}

/// Create the restaurant routes router.
pub fn restaurant_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(restaurants::index))
        .route("/{id}", get(restaurants::show))
        .route("/{id}/menu", get(restaurants::menu))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::show))
        .route("/summary", get(checkout::summary))
        .route("/items", post(checkout::add_item))
        .route("/items/{id}", delete(checkout::remove_item))
        .route("/items/{id}/quantity", put(checkout::set_quantity))
        .route("/items/{id}/instructions", put(checkout::set_instructions))
        .route("/note", put(checkout::set_note))
        .route("/address", put(checkout::select_address))
        .route("/payment", put(checkout::select_payment))
        .route("/advance", post(checkout::advance))
        .route("/back", post(checkout::back))
        .route("/submit", post(checkout::submit))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", auth_routes())
        .nest("/api/restaurants", restaurant_routes())
        .route("/api/addresses", get(checkout::addresses))
        .nest("/api/checkout", checkout_routes())
}

/// Build the complete application: routes, sessions, and middleware.
///
/// Sentry layers are added by the binary on top of this.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());

    routes()
        .layer(session_layer)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(|response: &Response<_>, latency: Duration, span: &Span| {
                    span.record("status", response.status().as_u16());
                    span.record(
                        "latency_ms",
                        u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                    );
                    DefaultOnResponse::default().on_response(response, latency, span);
                }),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_support {
    //! In-process client that keeps the session cookie between requests.

    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode, header},
    };
    use tower::ServiceExt;

    use crate::config::StorefrontConfig;
    use crate::state::AppState;

    pub struct TestApp {
        router: Router,
        cookie: Option<String>,
    }

    impl TestApp {
        pub fn new() -> Self {
            let config = StorefrontConfig::from_lookup(|_| None).unwrap();
            Self::with_state(AppState::with_demo_data(config).unwrap())
        }

        pub fn with_state(state: AppState) -> Self {
            Self {
                router: super::app(state),
                cookie: None,
            }
        }

        /// The session id carried by the current cookie.
        pub fn session_id(&self) -> Option<&str> {
            self.cookie.as_deref()?.split_once('=').map(|(_, id)| id)
        }

        pub async fn get(&mut self, uri: &str) -> (StatusCode, serde_json::Value) {
            self.send(Method::GET, uri, Body::empty()).await
        }

        pub async fn delete(&mut self, uri: &str) -> (StatusCode, serde_json::Value) {
            self.send(Method::DELETE, uri, Body::empty()).await
        }

        pub async fn post(
            &mut self,
            uri: &str,
            body: serde_json::Value,
        ) -> (StatusCode, serde_json::Value) {
            self.send(Method::POST, uri, Body::from(body.to_string())).await
        }

        pub async fn post_raw(&mut self, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
            self.send(Method::POST, uri, Body::from(body.to_string())).await
        }

        pub async fn put(
            &mut self,
            uri: &str,
            body: serde_json::Value,
        ) -> (StatusCode, serde_json::Value) {
            self.send(Method::PUT, uri, Body::from(body.to_string())).await
        }

        async fn send(
            &mut self,
            method: Method,
            uri: &str,
            body: Body,
        ) -> (StatusCode, serde_json::Value) {
            let mut request = Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json");
            if let Some(cookie) = &self.cookie {
                request = request.header(header::COOKIE, cookie);
            }

            let response = self
                .router
                .clone()
                .oneshot(request.body(body).unwrap())
                .await
                .unwrap();

            if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
                let pair = set_cookie.to_str().unwrap().split(';').next().unwrap();
                self.cookie = Some(pair.to_string());
            }

            let status = response.status();
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let json = if bytes.is_empty() {
                serde_json::Value::Null
            } else {
                serde_json::from_slice(&bytes).unwrap()
            };
            (status, json)
        }
    }
}
