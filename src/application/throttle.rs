//! Per-client access throttling.
//!
//! Best-effort abuse protection for the redirect endpoint: every successful
//! resolution counts against the requesting client, and clients past the
//! configured ceiling are refused. Counters live in process memory only;
//! they are not persisted, not shared across instances, and reset on
//! restart.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use moka::sync::Cache;

/// Bounded per-client access tally.
///
/// Backed by a fixed-capacity LRU cache of atomic counters, so the map
/// cannot grow without bound no matter how many distinct clients appear;
/// the least recently seen clients are evicted first. Constructed once at
/// startup and handed to the request-handling layer via `AppState` rather
/// than held as ambient global state.
pub struct ClientThrottle {
    counters: Cache<String, Arc<AtomicU64>>,
    max_accesses: u64,
}

impl ClientThrottle {
    /// Creates a throttle allowing `max_accesses` hits per client, tracking
    /// at most `capacity` clients at a time.
    pub fn new(max_accesses: u64, capacity: u64) -> Self {
        Self {
            counters: Cache::new(capacity),
            max_accesses,
        }
    }

    /// Counts one access for `client_key` and reports whether the client is
    /// still within its allowance.
    ///
    /// The increment is atomic; concurrent hits for the same client are all
    /// counted.
    pub fn hit(&self, client_key: &str) -> bool {
        let counter = self
            .counters
            .get_with(client_key.to_string(), || Arc::new(AtomicU64::new(0)));
        let total = counter.fetch_add(1, Ordering::Relaxed) + 1;
        total <= self.max_accesses
    }

    /// Current tally for a client; 0 when the client is unknown (or has
    /// been evicted).
    pub fn current(&self, client_key: &str) -> u64 {
        self.counters
            .get(client_key)
            .map(|counter| counter.load(Ordering::Relaxed))
            .unwrap_or(0)
    }
}
