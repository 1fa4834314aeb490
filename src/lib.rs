//! Polycache - A lightweight in-memory key-value cache
//!
//! Provides a bounded cache engine with interchangeable eviction policies
//! (unbounded, FIFO, LIFO, LRU, MRU) and injectable eviction observers.
//!
//! The store is a synchronous, single-threaded data structure: no operation
//! blocks or suspends. When shared across threads, wrap it in a `Mutex` or
//! `RwLock`; every instance owns its storage and ordering state exclusively.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{
    CacheEntry, CacheStats, CacheStore, DiscardLogger, EvictionObserver, EvictionPolicy,
    OrderTracker, MAX_ITEMS,
};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
