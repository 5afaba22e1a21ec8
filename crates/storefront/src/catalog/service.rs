//! Catalog orchestration: selection semantics and the stale-response guard.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, instrument};

use sapling_core::{CategoryId, ItemKey};

use crate::config::CatalogApiConfig;

use super::CatalogError;
use super::client::CatalogClient;
use super::types::{Category, Plant};

/// Outcome of a plant-list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlantsOutcome {
    /// The list for the requested category, in upstream order.
    Loaded(Vec<Plant>),
    /// A newer plant request was issued while this one was in flight; the
    /// response must not overwrite the newer render.
    Superseded,
}

/// Catalog service: fetch, normalize, and order plant/category reads.
///
/// Plant requests carry monotonically increasing sequence numbers so that a
/// slow response for an earlier selection cannot clobber a later one.
pub struct CatalogService {
    client: CatalogClient,
    plants_seq: AtomicU64,
}

impl CatalogService {
    /// Create a new catalog service.
    #[must_use]
    pub fn new(config: &CatalogApiConfig) -> Self {
        Self {
            client: CatalogClient::new(config),
            plants_seq: AtomicU64::new(0),
        }
    }

    /// Get the category list, synthetic "All Trees" entry first.
    ///
    /// The first entry is also the default active filter on initial load.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or times out.
    pub async fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        self.client.categories().await
    }

    /// Get the plant list for a category selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or times out, unless the
    /// request was superseded while in flight: a stale request must not
    /// surface anything, including its failure.
    #[instrument(skip(self), fields(category = %category))]
    pub async fn plants_for(&self, category: &CategoryId) -> Result<PlantsOutcome, CatalogError> {
        let seq = self.plants_seq.fetch_add(1, Ordering::SeqCst) + 1;

        let result = self.client.plants(category).await;

        if self.plants_seq.load(Ordering::SeqCst) != seq {
            debug!(seq, "discarding superseded plant response");
            return Ok(PlantsOutcome::Superseded);
        }

        result.map(PlantsOutcome::Loaded)
    }

    /// Look up a single plant by identity, for the detail view.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or times out.
    #[instrument(skip(self), fields(key = %key))]
    pub async fn plant(&self, key: &ItemKey) -> Result<Option<Plant>, CatalogError> {
        let plants = self.client.plants(&CategoryId::all()).await?;
        Ok(plants.into_iter().find(|plant| &plant.key == key))
    }
}
