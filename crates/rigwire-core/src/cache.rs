//! Freshness-bounded cache of device state.
//!
//! Entries are keyed by a concrete [`Vfo`] and a [`Quantity`]; callers must
//! resolve relative selectors before touching the cache. An entry is fresh
//! while its age is at most the TTL. Stale entries are indistinguishable
//! from misses.
//!
//! Every operation has an `_at` variant taking an explicit timestamp so
//! freshness can be tested without sleeping.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;
use tracing::trace;

use crate::types::{Quantity, Value, Vfo};

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    captured: Instant,
}

/// Per-VFO last-known values with a shared TTL.
#[derive(Debug, Clone)]
pub struct StateCache {
    ttl: Duration,
    entries: HashMap<(Vfo, Quantity), CacheEntry>,
}

impl StateCache {
    /// Create an empty cache. A zero `ttl` disables caching.
    pub fn new(ttl: Duration) -> Self {
        StateCache {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// The freshness window.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Whether caching is enabled.
    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    /// Look up `(vfo, quantity)` now.
    ///
    /// Returns the value and `true` only when the entry is fresh; a stale
    /// or missing entry yields `(None, false)`.
    pub fn read(&self, vfo: Vfo, quantity: Quantity) -> (Option<Value>, bool) {
        self.read_at(vfo, quantity, Instant::now())
    }

    /// Look up `(vfo, quantity)` as of `now`.
    pub fn read_at(&self, vfo: Vfo, quantity: Quantity, now: Instant) -> (Option<Value>, bool) {
        match self.entries.get(&(vfo, quantity)) {
            Some(entry) if now.saturating_duration_since(entry.captured) <= self.ttl => {
                (Some(entry.value.clone()), true)
            }
            _ => (None, false),
        }
    }

    /// Record a value confirmed by the device now.
    pub fn write(&mut self, vfo: Vfo, quantity: Quantity, value: Value) {
        self.write_at(vfo, quantity, value, Instant::now());
    }

    /// Record a value confirmed by the device at `now`.
    ///
    /// Nothing is stored while caching is disabled, and a zero frequency is
    /// never stored (rigs report it while switching bands).
    pub fn write_at(&mut self, vfo: Vfo, quantity: Quantity, value: Value, now: Instant) {
        if !self.is_enabled() || value == Value::Frequency(0) {
            return;
        }
        trace!(%vfo, ?quantity, ?value, "cache write");
        self.entries.insert(
            (vfo, quantity),
            CacheEntry {
                value,
                captured: now,
            },
        );
    }

    /// Drop one entry.
    pub fn invalidate(&mut self, vfo: Vfo, quantity: Quantity) {
        self.entries.remove(&(vfo, quantity));
    }

    /// Drop every entry held for `vfo`.
    pub fn invalidate_vfo(&mut self, vfo: Vfo) {
        self.entries.retain(|(v, _), _| *v != vfo);
    }

    /// Drop everything.
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries, fresh or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
