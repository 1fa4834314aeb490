//! Error types for the cache engine
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache construction and policy parsing.
///
/// Cache operations themselves (`put`, `get`, `remove`) are total functions
/// and never fail; this type covers the configuration edges only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Eviction policy name not recognized
    #[error("Unknown eviction policy: {0}")]
    UnknownPolicy(String),

    /// Bounded store constructed with an unusable capacity
    #[error("Invalid capacity for bounded cache: {0}")]
    InvalidCapacity(usize),
}

// == Result Type Alias ==
/// Convenience Result type for the cache engine.
pub type Result<T> = std::result::Result<T, CacheError>;
