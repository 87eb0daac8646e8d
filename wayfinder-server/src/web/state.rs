//! Application state for the web layer.

use std::sync::Arc;
use std::time::Duration;

use crate::building::Building;
use crate::cache::RouteCache;
use crate::config::ServerConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Building snapshot that routes are planned against
    pub building: Arc<Building>,

    /// Recently planned routes
    pub routes: Arc<RouteCache>,

    /// Upper bound on a single planning call
    pub plan_timeout: Duration,
}

impl AppState {
    /// Create a new app state.
    pub fn new(building: Building, config: &ServerConfig) -> Self {
        Self {
            building: Arc::new(building),
            routes: Arc::new(RouteCache::new(&config.cache)),
            plan_timeout: config.plan_timeout,
        }
    }
}
