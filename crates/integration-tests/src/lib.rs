//! Integration tests for Sapling.
//!
//! Each test spawns two in-process servers: a fake upstream catalog API
//! (plain axum routes returning fixture payloads) and the real storefront
//! router pointed at it. Requests go over real HTTP via `reqwest`, with a
//! cookie store so the session cart behaves as it would in a browser.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sapling-integration-tests
//! ```

use std::time::Duration;

use axum::Router;
use url::Url;

use sapling_storefront::config::{CatalogApiConfig, StorefrontConfig};
use sapling_storefront::state::AppState;
use sapling_storefront::{middleware, routes};

/// A running storefront instance under test.
pub struct TestApp {
    /// Base URL, e.g. `http://127.0.0.1:49152`.
    pub base_url: String,
}

/// Serve a router on an ephemeral local port, returning its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test server error");
    });

    format!("http://{addr}")
}

/// Spawn a fake upstream catalog API from the given routes.
///
/// Returns a base URL suitable for `CATALOG_API_BASE` (trailing slash
/// included).
pub async fn spawn_upstream(router: Router) -> String {
    format!("{}/", serve(router).await)
}

/// Spawn the storefront pointed at `catalog_base_url`.
pub async fn spawn_app(catalog_base_url: &str) -> TestApp {
    let config = StorefrontConfig {
        host: "127.0.0.1".parse().expect("host literal"),
        port: 0,
        catalog: CatalogApiConfig {
            base_url: Url::parse(catalog_base_url).expect("upstream base URL"),
            fetch_timeout: Duration::from_secs(2),
        },
    };

    let state = AppState::new(config);
    let app = Router::new()
        .merge(routes::routes())
        .layer(middleware::create_session_layer())
        .with_state(state);

    TestApp {
        base_url: serve(app).await,
    }
}

/// Create an HTTP client with a cookie store (one browsing session).
#[must_use]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}
