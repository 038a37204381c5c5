//! Cache Metrics
//!
//! Counters describing how the cache is behaving: requests, hits,
//! insertions, and the three ways an entry leaves (eviction, expiry,
//! explicit removal). Reports use `BTreeMap` rather than a hash map so the
//! output ordering is deterministic, which matters for reproducible test
//! and benchmark comparisons.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

use crate::policy::EvictionPolicy;

/// Counters common to any bounded cache.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoreCacheMetrics {
    /// Total lookups (`get` calls).
    pub requests: u64,

    /// Lookups that returned a live value.
    pub hits: u64,

    /// New entries created by `put`.
    pub insertions: u64,

    /// In-place replacements of an existing key by `put`.
    pub updates: u64,

    /// Entries removed to make room for a new one.
    pub evictions: u64,
}

impl CoreCacheMetrics {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a lookup that found a live entry.
    #[inline]
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.hits += 1;
    }

    /// Records a lookup that found nothing (absent or expired).
    #[inline]
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records creation of a new entry.
    #[inline]
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Records replacement of an existing entry's value.
    #[inline]
    pub fn record_update(&mut self) {
        self.updates += 1;
    }

    /// Records a capacity eviction.
    #[inline]
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Fraction of lookups that hit, or 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of lookups that missed, or 0.0 before any lookup.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            (self.requests - self.hits) as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Converts the counters to a deterministically ordered report.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();
        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("hits".to_string(), self.hits as f64);
        metrics.insert("misses".to_string(), (self.requests - self.hits) as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("updates".to_string(), self.updates as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());
        metrics
    }
}

/// Metrics for a TTL cache: the core counters plus the TTL-specific exit
/// paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtlCacheMetrics {
    /// Counters common to all bounded caches.
    pub core: CoreCacheMetrics,

    /// Entries removed because their deadline passed (discovered lazily at
    /// `get`, `len`, or the `put` capacity check).
    pub expired_removals: u64,

    /// Entries removed by an explicit `remove` call.
    pub explicit_removals: u64,

    policy: EvictionPolicy,
}

impl TtlCacheMetrics {
    /// Creates zeroed counters for a cache running the given policy.
    pub fn new(policy: EvictionPolicy) -> Self {
        Self {
            core: CoreCacheMetrics::new(),
            expired_removals: 0,
            explicit_removals: 0,
            policy,
        }
    }

    /// Records the lazy removal of an expired entry.
    #[inline]
    pub fn record_expiration(&mut self) {
        self.expired_removals += 1;
    }

    /// Records an explicit removal.
    #[inline]
    pub fn record_removal(&mut self) {
        self.explicit_removals += 1;
    }

    /// Converts all counters to a deterministically ordered report.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();
        metrics.insert(
            "expired_removals".to_string(),
            self.expired_removals as f64,
        );
        metrics.insert(
            "explicit_removals".to_string(),
            self.explicit_removals as f64,
        );
        metrics
    }
}

/// Uniform metrics reporting interface.
///
/// Uses `BTreeMap` so reports have a stable key order regardless of which
/// cache produced them.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Name of the eviction policy in effect (e.g. "LFU").
    fn algorithm_name(&self) -> &'static str;
}

impl CacheMetrics for TtlCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        self.policy.name()
    }
}
