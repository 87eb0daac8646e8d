//! Server configuration.

use std::net::SocketAddr;
use std::time::Duration;

use crate::cache::CacheConfig;

/// Environment variable holding the listen address.
pub const ADDR_VAR: &str = "WAYFINDER_ADDR";

/// Environment variable holding the planning timeout in milliseconds.
pub const PLAN_TIMEOUT_VAR: &str = "WAYFINDER_PLAN_TIMEOUT_MS";

const DEFAULT_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
    3000,
);

const DEFAULT_PLAN_TIMEOUT: Duration = Duration::from_millis(2000);

/// Error reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: invalid socket address {value:?}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var}: expected a positive number of milliseconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub addr: SocketAddr,
    /// Upper bound on a single planning call
    pub plan_timeout: Duration,
    /// Route cache settings
    pub cache: CacheConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR,
            plan_timeout: DEFAULT_PLAN_TIMEOUT,
            cache: CacheConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read overrides through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.addr = value.parse().map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(PLAN_TIMEOUT_VAR) {
            let ms = value
                .parse::<u64>()
                .ok()
                .filter(|&ms| ms > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout {
                    var: PLAN_TIMEOUT_VAR,
                    value: value.clone(),
                })?;
            config.plan_timeout = Duration::from_millis(ms);
        }

        Ok(config)
    }

    /// Set the planning timeout.
    pub fn with_plan_timeout(mut self, timeout: Duration) -> Self {
        self.plan_timeout = timeout;
        self
    }
}
