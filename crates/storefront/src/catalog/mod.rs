//! Upstream plant catalog client and normalization layer.
//!
//! # Architecture
//!
//! - The upstream API is an untrusted, loosely-typed JSON source; the
//!   [`envelope`] module is the sole compatibility boundary for its shifting
//!   response shapes and field names
//! - [`conversions`] maps normalized records onto canonical [`types`]
//! - [`CatalogClient`] fetches over HTTP with `reqwest` and caches reads via
//!   `moka` (5-minute TTL)
//! - [`CatalogService`] layers selection semantics and the stale-response
//!   guard on top of the client
//!
//! # Example
//!
//! ```rust,ignore
//! use sapling_storefront::catalog::CatalogService;
//!
//! let catalog = CatalogService::new(&config.catalog);
//!
//! let categories = catalog.categories().await?;
//! match catalog.plants_for(&categories[1].id).await? {
//!     PlantsOutcome::Loaded(plants) => render(plants),
//!     PlantsOutcome::Superseded => {} // a newer selection already rendered
//! }
//! ```

mod cache;
mod client;
mod service;

pub mod conversions;
pub mod envelope;
pub mod types;

pub use client::CatalogClient;
pub use service::{CatalogService, PlantsOutcome};
pub use types::{Category, Plant};

use thiserror::Error;

/// Errors that can occur when interacting with the catalog API.
///
/// All variants are network-class: malformed payloads are not errors (they
/// normalize to empty record lists) and missing fields degrade to defaults.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// Upstream fetch exceeded the configured timeout.
    #[error("catalog fetch timed out")]
    Timeout,

    /// Upstream returned a non-success HTTP status.
    #[error("catalog API returned status {0}")]
    Status(reqwest::StatusCode),

    /// A request URL could not be built from the configured base.
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "catalog API returned status 500 Internal Server Error"
        );

        assert_eq!(CatalogError::Timeout.to_string(), "catalog fetch timed out");
    }
}
