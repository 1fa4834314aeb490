//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;

use crate::cache::{EvictionPolicy, MAX_ITEMS};

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Eviction policy applied by the store
    pub policy: EvictionPolicy,
    /// Maximum number of entries a bounded store can hold
    pub max_items: usize,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_POLICY` - Eviction policy name (default: "lru")
    /// - `CACHE_MAX_ITEMS` - Maximum entries for bounded policies (default: 4)
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            policy: env::var("CACHE_POLICY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(EvictionPolicy::Lru),
            max_items: env::var("CACHE_MAX_ITEMS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(MAX_ITEMS),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            policy: EvictionPolicy::Lru,
            max_items: MAX_ITEMS,
        }
    }
}
