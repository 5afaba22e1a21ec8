//! Catalog API client implementation.
//!
//! Uses `reqwest` for HTTP with a per-request timeout and caches category
//! and plant reads using `moka` (5-minute TTL).

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use sapling_core::CategoryId;

use crate::config::CatalogApiConfig;

use super::CatalogError;
use super::cache::CacheValue;
use super::conversions::{category_records, convert_category, convert_plant, plant_records};
use super::types::{Category, Plant};

/// How long normalized catalog reads stay cached.
const CACHE_TTL: Duration = Duration::from_secs(300); // 5 minutes

/// Upper bound on cached entries (one per category plus the category list).
const CACHE_CAPACITY: u64 = 64;

// =============================================================================
// CatalogClient
// =============================================================================

/// Client for the upstream plant catalog API.
///
/// Fetches raw payloads, runs them through the envelope/conversion layer,
/// and returns canonical records. Category and plant reads are cached.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    config: CatalogApiConfig,
    cache: Cache<String, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog API client.
    #[must_use]
    pub fn new(config: &CatalogApiConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .time_to_live(CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                config: config.clone(),
                cache,
            }),
        }
    }

    /// Fetch a payload and parse it as JSON.
    ///
    /// A non-success status is an error; a body that is not valid JSON is
    /// not (the normalizer's contract is best-effort extraction, so it
    /// degrades to a payload with no records).
    async fn fetch_payload(&self, url: Url) -> Result<Value, CatalogError> {
        let response = self
            .inner
            .client
            .get(url.clone())
            .timeout(self.inner.config.fetch_timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                status = %status,
                url = %url,
                "catalog API returned non-success status"
            );
            return Err(CatalogError::Status(status));
        }

        let response_text = response.text().await?;

        match serde_json::from_str(&response_text) {
            Ok(payload) => Ok(payload),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    url = %url,
                    body = %response_text.chars().take(200).collect::<String>(),
                    "catalog payload was not valid JSON, treating as empty"
                );
                Ok(Value::Null)
            }
        }
    }

    /// Get the category list, with the synthetic "All Trees" entry first.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or times out.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        const CACHE_KEY: &str = "categories";

        // Check cache
        if let Some(CacheValue::Categories(categories)) = self.inner.cache.get(CACHE_KEY).await {
            debug!("Cache hit for categories");
            return Ok(categories);
        }

        let url = self.inner.config.base_url.join("categories")?;
        let payload = self.fetch_payload(url).await?;
        let records = category_records(&payload);

        let mut categories = Vec::with_capacity(records.len() + 1);
        categories.push(Category::all_trees());
        categories.extend(
            records
                .iter()
                .enumerate()
                .map(|(index, record)| convert_category(record, index)),
        );

        // Cache the result
        self.inner
            .cache
            .insert(CACHE_KEY.to_string(), CacheValue::Categories(categories.clone()))
            .await;

        Ok(categories)
    }

    /// Get the plant list for a category.
    ///
    /// The reserved `all` id hits the unfiltered endpoint. An empty list is
    /// a valid outcome: the category has no items.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or times out.
    #[instrument(skip(self), fields(category = %category))]
    pub async fn plants(&self, category: &CategoryId) -> Result<Vec<Plant>, CatalogError> {
        let cache_key = format!("plants:{category}");

        // Check cache
        if let Some(CacheValue::Plants(plants)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for plants");
            return Ok(plants);
        }

        let base = &self.inner.config.base_url;
        let url = if category.is_all() {
            base.join("plants")?
        } else {
            base.join(&format!("category/{category}"))?
        };

        let payload = self.fetch_payload(url).await?;
        let plants: Vec<Plant> = plant_records(&payload).iter().map(convert_plant).collect();

        // Cache the result
        self.inner
            .cache
            .insert(cache_key, CacheValue::Plants(plants.clone()))
            .await;

        Ok(plants)
    }
}
