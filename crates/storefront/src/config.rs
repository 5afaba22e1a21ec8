//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional and fall back to development defaults:
//! - `SAPLING_HOST` - Bind address (default: 127.0.0.1)
//! - `SAPLING_PORT` - Listen port (default: 3000)
//! - `CATALOG_API_BASE` - Base URL of the upstream plant catalog API
//!   (default: <https://openapi.programming-hero.com/api>)
//! - `CATALOG_FETCH_TIMEOUT_SECS` - Upstream fetch timeout (default: 10)

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default upstream catalog API base.
const DEFAULT_API_BASE: &str = "https://openapi.programming-hero.com/api";

/// Default upstream fetch timeout in seconds.
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Upstream catalog API configuration
    pub catalog: CatalogApiConfig,
}

/// Upstream catalog API configuration.
#[derive(Debug, Clone)]
pub struct CatalogApiConfig {
    /// Base URL of the catalog API, normalized to end with `/` so that
    /// `Url::join` appends rather than replaces the last path segment.
    pub base_url: Url,
    /// Timeout applied to every upstream fetch.
    pub fetch_timeout: Duration,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("SAPLING_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SAPLING_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("SAPLING_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SAPLING_PORT".to_string(), e.to_string()))?;

        let catalog = CatalogApiConfig::from_env()?;

        Ok(Self {
            host,
            port,
            catalog,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl CatalogApiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = normalize_base_url(&get_env_or_default("CATALOG_API_BASE", DEFAULT_API_BASE))
            .map_err(|e| ConfigError::InvalidEnvVar("CATALOG_API_BASE".to_string(), e))?;

        let timeout_secs = get_env_or_default(
            "CATALOG_FETCH_TIMEOUT_SECS",
            &DEFAULT_FETCH_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("CATALOG_FETCH_TIMEOUT_SECS".to_string(), e.to_string())
        })?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "CATALOG_FETCH_TIMEOUT_SECS".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            base_url,
            fetch_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse and normalize a catalog base URL.
///
/// The trailing slash matters: `Url::join("categories")` on a base without
/// one would replace the final path segment instead of appending to it.
fn normalize_base_url(raw: &str) -> Result<Url, String> {
    let mut url = Url::parse(raw).map_err(|e| e.to_string())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme '{}'", url.scheme()));
    }
    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }
    Ok(url)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url_appends_trailing_slash() {
        let url = normalize_base_url("https://example.com/api").unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/");
        assert_eq!(
            url.join("category/5").unwrap().as_str(),
            "https://example.com/api/category/5"
        );
    }

    #[test]
    fn test_normalize_base_url_keeps_existing_slash() {
        let url = normalize_base_url("http://127.0.0.1:8080/v1/").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/v1/");
    }

    #[test]
    fn test_normalize_base_url_rejects_non_http_schemes() {
        assert!(normalize_base_url("ftp://example.com/api").is_err());
        assert!(normalize_base_url("not a url").is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            catalog: CatalogApiConfig {
                base_url: normalize_base_url(DEFAULT_API_BASE).unwrap(),
                fetch_timeout: Duration::from_secs(10),
            },
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}
