//! Health service: independent reachability probes for the service dependencies.

use crate::cache::CacheInterface;
use crate::dto::HealthReport;
use async_trait::async_trait;
use roster_repository::DatabasePoolInterface;
use shaku::{Component, Interface};
use std::sync::Arc;
use tracing::warn;

/// Health service trait.
#[async_trait]
pub trait HealthService: Interface + Send + Sync {
    /// Probes the persistence and cache layers independently.
    ///
    /// Performs no caching and has no side effects.
    async fn check(&self) -> HealthReport;
}

/// Health service implementation.
#[derive(Component)]
#[shaku(interface = HealthService)]
pub struct HealthServiceComponent {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
}

impl HealthServiceComponent {
    /// Creates a new health service.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>, cache: Arc<dyn CacheInterface>) -> Self {
        Self { pool, cache }
    }
}

#[async_trait]
impl HealthService for HealthServiceComponent {
    async fn check(&self) -> HealthReport {
        let database = match self.pool.health_check().await {
            Ok(()) => true,
            Err(e) => {
                warn!("Database health check failed: {}", e);
                false
            }
        };

        let redis = match self.cache.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!("Redis health check failed: {}", e);
                false
            }
        };

        HealthReport { database, redis }
    }
}

impl std::fmt::Debug for HealthServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthServiceComponent").finish_non_exhaustive()
    }
}
