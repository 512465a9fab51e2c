//! Configuration Module
//!
//! Handles cache and client configuration, loaded from environment variables
//! with sensible defaults.

use std::env;
use std::time::Duration;

use crate::auth::AuthMethod;

// == Cache Config ==
/// Configuration for a cache store.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// Default TTL for entries cached without an explicit policy TTL
    pub default_ttl: Duration,
    /// Process-wide enable switch; when false, decorated calls always reach
    /// the underlying function
    pub enabled: bool,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `OHDSI_CACHE_MAX_ENTRIES` - Maximum cache entries (default: 1000)
    /// - `OHDSI_CACHE_TTL` - Default TTL in seconds (default: 300)
    /// - `OHDSI_CACHE_ENABLED` - Enable switch, "true"/"false" (default: true)
    pub fn from_env() -> Self {
        Self {
            max_entries: env::var("OHDSI_CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            default_ttl: env::var("OHDSI_CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(Duration::from_secs(300)),
            enabled: env::var("OHDSI_CACHE_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 1000,
            default_ttl: Duration::from_secs(300),
            enabled: true,
        }
    }
}

// == Client Config ==
/// Configuration for a [`WebApiClient`](crate::WebApiClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the WebAPI instance, e.g. `https://atlas.example.org/WebAPI`
    pub base_url: String,
    /// Request timeout applied to every HTTP call
    pub timeout: Duration,
    /// Authentication scheme for outgoing requests
    pub auth: AuthMethod,
}

impl ClientConfig {
    /// Creates a config for the given base URL with a 30s timeout and no auth.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            auth: AuthMethod::None,
        }
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the authentication scheme.
    pub fn auth(mut self, auth: AuthMethod) -> Self {
        self.auth = auth;
        self
    }
}
