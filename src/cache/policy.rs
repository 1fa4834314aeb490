//! Eviction Policy Module
//!
//! Defines the eviction disciplines supported by the cache store.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CacheError;

// == Eviction Policy ==
/// Eviction discipline applied by a cache store when it reaches capacity.
///
/// `Unbounded` never evicts. The four bounded policies share one order
/// tracker and differ only in when keys move within it and which end the
/// victim comes from:
///
/// | Policy | Reorders on update | Reorders on get | Victim        |
/// |--------|--------------------|-----------------|---------------|
/// | FIFO   | no                 | no              | oldest insert |
/// | LIFO   | yes                | no              | newest insert |
/// | LRU    | yes                | yes             | least recent  |
/// | MRU    | yes                | yes             | most recent   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EvictionPolicy {
    /// No capacity limit, no eviction
    Unbounded,
    /// Evicts the oldest inserted key
    Fifo,
    /// Evicts the most recently inserted key
    Lifo,
    /// Evicts the least recently used key
    Lru,
    /// Evicts the most recently used key
    Mru,
}

impl EvictionPolicy {
    /// All supported policies, in declaration order.
    pub const ALL: [EvictionPolicy; 5] = [
        EvictionPolicy::Unbounded,
        EvictionPolicy::Fifo,
        EvictionPolicy::Lifo,
        EvictionPolicy::Lru,
        EvictionPolicy::Mru,
    ];

    // == Is Bounded ==
    /// Returns true if the policy enforces a capacity limit.
    pub fn is_bounded(&self) -> bool {
        !matches!(self, EvictionPolicy::Unbounded)
    }

    // == Tracks Reads ==
    /// Returns true if a successful `get` marks the key most recently used.
    pub fn tracks_reads(&self) -> bool {
        matches!(self, EvictionPolicy::Lru | EvictionPolicy::Mru)
    }

    // == Reorders On Update ==
    /// Returns true if a `put` on an existing key moves it to the newest
    /// position.
    ///
    /// FIFO keys keep their original insertion slot across updates.
    pub fn reorders_on_update(&self) -> bool {
        matches!(
            self,
            EvictionPolicy::Lifo | EvictionPolicy::Lru | EvictionPolicy::Mru
        )
    }

    // == Name ==
    /// Returns the canonical lowercase policy name.
    pub fn as_str(&self) -> &'static str {
        match self {
            EvictionPolicy::Unbounded => "unbounded",
            EvictionPolicy::Fifo => "fifo",
            EvictionPolicy::Lifo => "lifo",
            EvictionPolicy::Lru => "lru",
            EvictionPolicy::Mru => "mru",
        }
    }
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvictionPolicy {
    type Err = CacheError;

    /// Parses a policy name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unbounded" => Ok(EvictionPolicy::Unbounded),
            "fifo" => Ok(EvictionPolicy::Fifo),
            "lifo" => Ok(EvictionPolicy::Lifo),
            "lru" => Ok(EvictionPolicy::Lru),
            "mru" => Ok(EvictionPolicy::Mru),
            _ => Err(CacheError::UnknownPolicy(s.to_string())),
        }
    }
}
