//! Application state for the web layer.

use std::sync::Arc;

use crate::booking::BookingIssuer;
use crate::cache::{CacheConfig, CachedPlanner};
use crate::network::{MetroNetwork, StationDirectory};

/// Shared application state.
///
/// Everything here is immutable after startup (the route cache synchronises
/// itself), so handlers share it without locks.
#[derive(Clone)]
pub struct AppState {
    /// Station metadata and name lookup
    pub directory: Arc<StationDirectory>,

    /// Route planner with result cache
    pub planner: Arc<CachedPlanner>,

    /// Booking issuer holding the signing key
    pub issuer: Arc<BookingIssuer>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: MetroNetwork, issuer: BookingIssuer, cache_config: &CacheConfig) -> Self {
        let MetroNetwork { directory, graph } = network;

        Self {
            directory: Arc::new(directory),
            planner: Arc::new(CachedPlanner::new(Arc::new(graph), cache_config)),
            issuer: Arc::new(issuer),
        }
    }
}
