//! Eviction Notifier Module
//!
//! Side-channel reporting which key a store evicted.

use tracing::info;

// == Eviction Observer ==
/// Receives the victim key whenever a store evicts an entry.
///
/// The store invokes the observer before the victim leaves the store, so an
/// observer holding its own view of prior state can still reconcile against
/// it. Any `FnMut(&str)` closure is accepted as an observer.
pub trait EvictionObserver: Send {
    /// Called exactly once per eviction with the evicted key.
    fn on_evict(&mut self, key: &str);
}

impl<F> EvictionObserver for F
where
    F: FnMut(&str) + Send,
{
    fn on_evict(&mut self, key: &str) {
        self(key)
    }
}

// == Discard Logger ==
/// Default observer that logs evicted keys at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardLogger;

impl EvictionObserver for DiscardLogger {
    fn on_evict(&mut self, key: &str) {
        info!("DISCARD: {}", key);
    }
}
