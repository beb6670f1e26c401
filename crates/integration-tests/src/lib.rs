//! Integration tests for Quickbite.
//!
//! Each test starts the storefront in-process on an ephemeral port and talks
//! to it over real HTTP with a cookie-keeping client, one server per test.
//!
//! ```bash
//! cargo test -p quickbite-integration-tests
//! ```

use std::net::SocketAddr;

use quickbite_storefront::config::{ConfigError, StorefrontConfig};
use quickbite_storefront::state::AppState;
use reqwest::{Client, Response};
use serde_json::Value;

/// A storefront running on a background task.
pub struct TestServer {
    base_url: String,
    client: Client,
}

impl TestServer {
    /// Start a server with default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot be started.
    pub async fn spawn() -> Self {
        Self::spawn_with(&[]).await
    }

    /// Start a server with configuration overrides.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid or the server cannot be started.
    pub async fn spawn_with(vars: &[(&str, &str)]) -> Self {
        let config = config_from(vars).expect("invalid test configuration");
        let state = AppState::with_demo_data(config).expect("demo data is consistent");

        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("listener has an address");

        tokio::spawn(async move {
            axum::serve(listener, quickbite_storefront::app(state))
                .await
                .expect("Server error");
        });

        Self {
            base_url: format!("http://{addr}"),
            client: Self::new_client(),
        }
    }

    /// A client with its own cookie jar, i.e. a separate visitor.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built.
    #[must_use]
    pub fn new_client() -> Client {
        Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client")
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    /// `GET` with this server's client.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the body is not JSON.
    pub async fn get(&self, path: &str) -> (u16, Value) {
        read(self.client.get(self.url(path)).send().await).await
    }

    /// `POST` a JSON body with this server's client.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the body is not JSON.
    pub async fn post(&self, path: &str, body: &Value) -> (u16, Value) {
        read(self.client.post(self.url(path)).json(body).send().await).await
    }

    /// `PUT` a JSON body with this server's client.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the body is not JSON.
    pub async fn put(&self, path: &str, body: &Value) -> (u16, Value) {
        read(self.client.put(self.url(path)).json(body).send().await).await
    }
}

fn config_from(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
    StorefrontConfig::from_lookup(|key| {
        vars.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_string())
    })
}

async fn read(response: reqwest::Result<Response>) -> (u16, Value) {
    let response = response.expect("request failed");
    let status = response.status().as_u16();
    let body = response.json().await.expect("response body is JSON");
    (status, body)
}
