//! Caching layer for journey-maps transfer responses.
//!
//! Station layouts change rarely, so a transfer between two tracks can be
//! served from memory for a while. Entries are keyed by the full request,
//! so accessible and regular routes stay apart.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::features::FeatureCollection;
use crate::journey_maps::{TransferClient, TransferError, TransferRequest};

/// Cached transfer entry.
type TransferEntry = Arc<FeatureCollection>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(15 * 60),
            max_capacity: 1000,
        }
    }
}

/// Cache for transfer responses.
pub struct TransferCache {
    transfers: MokaCache<TransferRequest, TransferEntry>,
}

impl TransferCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let transfers = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { transfers }
    }

    /// Get a cached transfer.
    pub async fn get(&self, key: &TransferRequest) -> Option<TransferEntry> {
        self.transfers.get(key).await
    }

    /// Insert a transfer into the cache.
    pub async fn insert(&self, key: TransferRequest, entry: TransferEntry) {
        self.transfers.insert(key, entry).await;
    }
}

/// Transfer client with caching.
///
/// Wraps a `TransferClient`; only successful responses are cached.
pub struct CachedTransferClient {
    client: TransferClient,
    cache: TransferCache,
}

impl CachedTransferClient {
    /// Create a new cached client.
    pub fn new(client: TransferClient, cache_config: &CacheConfig) -> Self {
        Self {
            client,
            cache: TransferCache::new(cache_config),
        }
    }

    /// Fetch a transfer, using the cache if available.
    pub async fn fetch(&self, request: &TransferRequest) -> Result<TransferEntry, TransferError> {
        if let Some(cached) = self.cache.get(request).await {
            trace!(station = %request.station_id, "transfer cache hit");
            return Ok(cached);
        }

        let entry = Arc::new(self.client.fetch(request).await?);
        self.cache.insert(request.clone(), entry.clone()).await;

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(900));
        assert_eq!(config.max_capacity, 1000);
    }

    #[tokio::test]
    async fn insert_and_get() {
        let cache = TransferCache::new(&CacheConfig::default());
        let request = TransferRequest::new("8503000", "31", "18");
        let entry = Arc::new(FeatureCollection::default());

        assert!(cache.get(&request).await.is_none());
        cache.insert(request.clone(), entry.clone()).await;

        let cached = cache.get(&request).await.unwrap();
        assert!(Arc::ptr_eq(&cached, &entry));

        // Accessibility is part of the key
        let regular = request.with_accessible(false);
        assert!(cache.get(&regular).await.is_none());
    }

    #[tokio::test]
    async fn cached_client_serves_from_cache() {
        let client = TransferClient::new(
            crate::journey_maps::TransferClientConfig::new("key")
                .with_base_url("http://127.0.0.1:9"),
        )
        .unwrap();
        let cached = CachedTransferClient::new(client, &CacheConfig::default());
        let request = TransferRequest::new("8503000", "31", "18");
        let entry = Arc::new(FeatureCollection::default());

        // Pre-seeded entries never reach the (unreachable) server
        cached.cache.insert(request.clone(), entry.clone()).await;
        let fetched = cached.fetch(&request).await.unwrap();
        assert!(Arc::ptr_eq(&fetched, &entry));
    }

    #[tokio::test]
    async fn failed_fetch_is_not_cached() {
        let client = TransferClient::new(
            crate::journey_maps::TransferClientConfig::new("key")
                .with_base_url("http://127.0.0.1:9"),
        )
        .unwrap();
        let cached = CachedTransferClient::new(client, &CacheConfig::default());
        let request = TransferRequest::new("8503000", "31", "18");

        assert!(cached.fetch(&request).await.is_err());
        assert!(cached.cache.get(&request).await.is_none());
    }
}
