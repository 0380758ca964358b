//! Caching layer for the MBTA stop catalog.
//!
//! Station-name resolution needs the full rail stop catalog, and the
//! catalog changes rarely. Caching it process-wide turns per-step
//! resolution from a network call into a local scan, without changing
//! match semantics.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::mbta::{MbtaClient, MbtaError, StopResource};

/// The catalog cache has a single entry: the full rail stop list.
type CatalogEntry = Arc<Vec<StopResource>>;

/// Configuration for the stop catalog cache.
#[derive(Debug, Clone)]
pub struct CatalogCacheConfig {
    /// TTL for the cached catalog.
    pub ttl: Duration,
}

impl Default for CatalogCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
        }
    }
}

/// MBTA stop catalog with caching.
///
/// Wraps an [`MbtaClient`] and caches the rail stop list.
pub struct CachedStopCatalog {
    client: MbtaClient,
    stops: MokaCache<(), CatalogEntry>,
}

impl CachedStopCatalog {
    /// Create a new cached catalog.
    pub fn new(client: MbtaClient, config: &CatalogCacheConfig) -> Self {
        let stops = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(1)
            .build();

        Self { client, stops }
    }

    /// Get the rail stop catalog, using the cache if fresh.
    pub async fn rail_stops(&self) -> Result<CatalogEntry, MbtaError> {
        if let Some(cached) = self.stops.get(&()).await {
            return Ok(cached);
        }

        let entry: CatalogEntry = Arc::new(self.client.rail_stops().await?);
        self.stops.insert((), entry.clone()).await;

        Ok(entry)
    }

    /// Drop the cached catalog so the next read refetches.
    pub fn invalidate(&self) {
        self.stops.invalidate_all();
    }
}
