//! Cache Store Module
//!
//! Cache engine combining HashMap storage with policy-driven order tracking
//! and eviction notification.

use std::collections::HashMap;
use std::fmt;

use crate::cache::{
    CacheEntry, CacheStats, DiscardLogger, EvictionObserver, EvictionPolicy, OrderTracker,
};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Key-value store with a fixed eviction policy.
///
/// Bounded policies never hold more than `capacity` entries. When inserting
/// a new key into a full store, the policy picks exactly one victim, the
/// eviction observer is notified, and the victim is removed. The tracker's
/// key set always matches the stored key set for bounded policies.
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Key ordering used to pick eviction victims
    order: OrderTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Eviction discipline
    policy: EvictionPolicy,
    /// Maximum number of entries, None for the unbounded policy
    capacity: Option<usize>,
    /// Eviction side-channel
    observer: Box<dyn EvictionObserver>,
}

impl fmt::Debug for CacheStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheStore")
            .field("policy", &self.policy)
            .field("capacity", &self.capacity)
            .field("len", &self.entries.len())
            .field("stats", &self.stats)
            .finish()
    }
}

impl CacheStore {
    // == Constructors ==
    /// Creates a new CacheStore with the given policy and capacity.
    ///
    /// The capacity is fixed for the store's lifetime. The `Unbounded`
    /// policy ignores it.
    ///
    /// # Arguments
    /// * `policy` - Eviction discipline applied on overflow
    /// * `capacity` - Maximum number of entries for bounded policies
    ///
    /// # Errors
    /// Returns `CacheError::InvalidCapacity` for a bounded policy with
    /// capacity 0.
    pub fn new(policy: EvictionPolicy, capacity: usize) -> Result<Self> {
        if policy.is_bounded() && capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }
        Ok(Self {
            entries: HashMap::new(),
            order: OrderTracker::new(),
            stats: CacheStats::new(),
            policy,
            capacity: policy.is_bounded().then_some(capacity),
            observer: Box::new(DiscardLogger),
        })
    }

    /// Creates a store with no capacity limit and no order tracking.
    pub fn unbounded() -> Self {
        Self {
            entries: HashMap::new(),
            order: OrderTracker::new(),
            stats: CacheStats::new(),
            policy: EvictionPolicy::Unbounded,
            capacity: None,
            observer: Box::new(DiscardLogger),
        }
    }

    /// Creates a store from configuration.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Self::new(config.policy, config.max_items)
    }

    // == Observer ==
    /// Replaces the eviction observer.
    ///
    /// Accepts any [`EvictionObserver`], including `FnMut(&str)` closures.
    pub fn with_observer(mut self, observer: impl EvictionObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    // == Put ==
    /// Inserts or updates a key-value pair.
    ///
    /// An empty key or empty value leaves the store untouched. Inserting a
    /// new key into a full bounded store evicts exactly one victim, chosen
    /// by the policy; the observer fires before the victim is removed.
    /// Updating an existing key never changes the entry count and, for
    /// policies that reorder on update, moves the key to the newest
    /// position.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    pub fn put(&mut self, key: String, value: String) {
        if key.is_empty() || value.is_empty() {
            return;
        }

        if self.entries.contains_key(&key) {
            if let Some(entry) = self.entries.get_mut(&key) {
                entry.update(value);
            }
            if self.policy.reorders_on_update() {
                self.order.touch(&key);
            }
            self.stats.record_update();
        } else {
            // A new key on a full store costs one victim, picked before
            // the key enters the tracker.
            if self.is_full() {
                self.evict_one();
            }
            self.entries.insert(key.clone(), CacheEntry::new(value));
            if self.policy.is_bounded() {
                self.order.insert(&key);
            }
            self.stats.record_insertion();
        }

        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns None for an empty or missing key. For the LRU and MRU
    /// policies a hit also marks the key as most recently used, exactly as
    /// a put would.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub fn get(&mut self, key: &str) -> Option<String> {
        if key.is_empty() {
            return None;
        }
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.touch();
                let value = entry.value.clone();
                if self.policy.tracks_reads() {
                    self.order.touch(key);
                }
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Remove ==
    /// Removes an entry by key, returning its value.
    ///
    /// Explicit removal is not an eviction: the observer is not notified
    /// and the eviction counter is untouched.
    ///
    /// # Arguments
    /// * `key` - The key to remove
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let entry = self.entries.remove(key)?;
        self.order.remove(key);
        self.stats.set_total_entries(self.entries.len());
        Some(entry.value)
    }

    // == Clear ==
    /// Removes all entries and ordering state. Statistics counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.stats.set_total_entries(0);
    }

    // == Contains ==
    /// Returns true if the key is present.
    ///
    /// Unlike `get`, this affects neither recency nor statistics.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Peek ==
    /// Returns the entry for a key, with its access metadata.
    ///
    /// Like `contains`, peeking affects neither recency nor statistics.
    pub fn peek(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Policy ==
    /// Returns the store's eviction policy.
    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    // == Capacity ==
    /// Returns the maximum entry count, or None for the unbounded policy.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Ordered Keys ==
    /// Returns the tracked keys, oldest position first.
    ///
    /// Empty for the unbounded policy, which keeps no ordering.
    pub fn ordered_keys(&self) -> Vec<String> {
        self.order.keys()
    }

    // == Internal Helpers ==
    /// True when a bounded store has reached its capacity.
    fn is_full(&self) -> bool {
        match self.capacity {
            Some(capacity) => self.entries.len() >= capacity,
            None => false,
        }
    }

    /// Evicts one victim according to the policy.
    ///
    /// The observer fires while the victim is still stored.
    fn evict_one(&mut self) {
        let victim = match self.policy {
            EvictionPolicy::Unbounded => return,
            EvictionPolicy::Fifo | EvictionPolicy::Lru => self.order.front().map(str::to_owned),
            EvictionPolicy::Lifo | EvictionPolicy::Mru => self.order.back().map(str::to_owned),
        };
        if let Some(victim) = victim {
            self.observer.on_evict(&victim);
            self.order.remove(&victim);
            self.entries.remove(&victim);
            self.stats.record_eviction();
        }
    }
}
