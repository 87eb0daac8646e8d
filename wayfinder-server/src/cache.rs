//! Route cache for the HTTP surface.
//!
//! Tracking clients re-request routes many times a second while the user
//! stands still or drifts slightly. Requests are keyed on the node the start
//! position resolves to, so every position nearest the same node shares an
//! entry for a given destination and preferences. Entries expire after a
//! short TTL.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{NodeId, PoiId};
use crate::planner::{NavigationPreferences, PlanResult};

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
            ttl: Duration::from_secs(30),
            max_capacity: 10_000,
        }
    }
}

/// Preferences reduced to hashable bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PreferenceKey {
    flags: u8,
    walking_speed: u64,
    floor_change_penalty: u64,
}

impl From<&NavigationPreferences> for PreferenceKey {
    fn from(p: &NavigationPreferences) -> Self {
        let flags = u8::from(p.require_wheelchair_access)
            | u8::from(p.avoid_stairs) << 1
            | u8::from(p.prefer_elevators) << 2
            | u8::from(p.strict_accessibility) << 3;
        Self {
            flags,
            walking_speed: p.walking_speed.to_bits(),
            floor_change_penalty: p.floor_change_penalty.to_bits(),
        }
    }
}

/// Cache key: (destination, start node, preferences).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey {
    destination: PoiId,
    start: NodeId,
    preferences: PreferenceKey,
}

/// Cached planning result.
type RouteEntry = Arc<PlanResult>;

/// Cache of planning results.
pub struct RouteCache {
    routes: MokaCache<RouteKey, RouteEntry>,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { routes }
    }

    /// Build the key for a request whose start resolved to `start`.
    pub fn key(
        &self,
        destination: &PoiId,
        start: &NodeId,
        preferences: &NavigationPreferences,
    ) -> RouteKey {
        RouteKey {
            destination: destination.clone(),
            start: start.clone(),
            preferences: preferences.into(),
        }
    }

    /// Get a cached result.
    pub async fn get(&self, key: &RouteKey) -> Option<RouteEntry> {
        self.routes.get(key).await
    }

    /// Insert a result into the cache.
    pub async fn insert(&self, key: RouteKey, entry: RouteEntry) {
        self.routes.insert(key, entry).await;
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
