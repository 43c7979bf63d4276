//! Caching layer for route searches.
//!
//! The network graph never changes after startup, so a route computed once
//! stays correct for the life of the process. Only successful searches are
//! cached; "no path" results are cheap to recompute and are not stored.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::domain::StationId;
use crate::network::NetworkGraph;
use crate::planner::{Planner, RouteError, RouteResult};

/// Cache key for routes: (source, destination).
type RouteKey = (StationId, StationId);

/// Configuration for the route cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of cached routes.
    pub max_capacity: u64,

    /// Entries unused for this long are evicted.
    pub time_to_idle: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 1024,
            time_to_idle: Duration::from_secs(10 * 60),
        }
    }
}

/// Route planner with a bounded result cache.
pub struct CachedPlanner {
    graph: Arc<NetworkGraph>,
    routes: MokaCache<RouteKey, Arc<RouteResult>>,
}

impl CachedPlanner {
    /// Create a new cached planner over `graph`.
    pub fn new(graph: Arc<NetworkGraph>, config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .max_capacity(config.max_capacity)
            .time_to_idle(config.time_to_idle)
            .build();

        Self { graph, routes }
    }

    /// Find a route, using the cache if available.
    pub async fn find_route(
        &self,
        source: StationId,
        destination: StationId,
    ) -> Result<Arc<RouteResult>, RouteError> {
        let key = (source, destination);

        if let Some(cached) = self.routes.get(&key).await {
            trace!(from = %source, to = %destination, "route cache hit");
            return Ok(cached);
        }

        let route = Arc::new(Planner::new(&self.graph).find_route(source, destination)?);
        self.routes.insert(key, route.clone()).await;

        Ok(route)
    }

    /// The graph routes are computed over.
    pub fn graph(&self) -> &NetworkGraph {
        &self.graph
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}
