#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Policy Selection Guide
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │               Which Eviction Policy Should I Use?                │
//! ├──────────────────────────────────────────────────────────────────┤
//! │                                                                  │
//! │  Popularity is stable? (popular = hot)  ──▶  Lfu (default)       │
//! │  Recent access predicts reuse?          ──▶  Lru                 │
//! │  Entries lose value as they age?        ──▶  TtlSoonest          │
//! │                                                                  │
//! │  Under every policy, already-expired entries are reclaimed       │
//! │  before any live entry is considered for eviction.               │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Reference
//!
//! | Type | Description |
//! |------|-------------|
//! | [`TtlCache`] | Bounded TTL cache, single logical owner |
//! | `ConcurrentTtlCache` | Mutex-guarded wrapper (`concurrent` feature) |
//! | [`TtlCacheConfig`] | Capacity, default TTL, and policy |
//! | [`EvictionPolicy`] | `Lru`, `Lfu` (default), `TtlSoonest` |
//! | [`ManualClock`] | Hand-advanced time source for tests and `no_std` |
//!
//! ## Eviction Order (LFU, the canonical policy)
//!
//! When a `put` must make room, the victim is chosen by this total order:
//!
//! 1. Already-expired entries go first (purged, not evicted).
//! 2. Lowest access count.
//! 3. Ties: soonest expiry deadline.
//! 4. Remaining ties: oldest insertion.
//!
//! Rank keys are unique per entry, so the choice is deterministic for a
//! given entry set and clock reading.
//!
//! ## Example
//!
//! ```rust
//! use ttl_cache_rs::{EvictionPolicy, ManualClock, TtlCache, TtlCacheConfig};
//! use std::time::Duration;
//!
//! let config = TtlCacheConfig::new(2, Duration::from_secs(60))
//!     .with_policy(EvictionPolicy::Lfu);
//! let mut cache = TtlCache::with_clock(config, ManualClock::new()).unwrap();
//!
//! cache.put("a", 1);
//! cache.put_with_ttl("b", 2, Duration::from_secs(5)).unwrap();
//! cache.get(&"a");
//!
//! // "b" has the lower access count, so it is the victim.
//! assert_eq!(cache.put("c", 3), Some(("b", 2)));
//!
//! // Time passes; "a" and "c" outlive their default TTL.
//! cache.clock().advance(Duration::from_secs(61));
//! assert_eq!(cache.len(), 0);
//! ```
//!
//! ## Modules
//!
//! - [`cache`]: the bounded TTL cache implementation
//! - [`policy`]: eviction policies and their rank orders
//! - [`entry`]: cache entry type (value + expiry/access metadata)
//! - [`clock`]: time sources, including the test-friendly manual clock
//! - [`config`]: configuration and validation
//! - [`error`]: the validation error type
//! - [`metrics`]: counters and the reporting trait
//! - `concurrent`: thread-safe wrapper (requires `concurrent` feature)

#![no_std]

#[cfg(not(feature = "hashbrown"))]
extern crate std;

/// Cache entry type.
///
/// Holds a cached value together with the expiry deadline, access count,
/// and sequence numbers the eviction policies rank by.
pub mod entry;

/// Eviction policies.
///
/// The pluggable strategies (`Lru`, `Lfu`, `TtlSoonest`) and the total
/// order each imposes on live entries.
pub mod policy;

/// Time sources.
///
/// The `Clock` trait plus the wall clock (`std` feature) and a manually
/// advanced clock for deterministic expiry tests.
pub mod clock;

/// Cache configuration.
///
/// Capacity, default TTL, and policy, validated at construction.
pub mod config;

/// Error types.
///
/// The single validation error class; misses and evictions are never
/// errors.
pub mod error;

/// Bounded TTL cache implementation.
///
/// The core store: hash map of entries plus ordered indexes for O(log n)
/// victim selection and expiry purging.
pub mod cache;

/// Cache metrics.
///
/// Counters for hits, misses, insertions, evictions, and expiries, with
/// deterministic `BTreeMap` reporting.
pub mod metrics;

/// Concurrent cache wrapper.
///
/// A single-mutex wrapper giving operation-granularity atomicity.
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

// Re-export the primary types
pub use cache::TtlCache;
pub use clock::{Clock, DefaultClock, ManualClock};
pub use config::TtlCacheConfig;
pub use entry::CacheEntry;
pub use error::CacheError;
pub use metrics::{CacheMetrics, CoreCacheMetrics, TtlCacheMetrics};
pub use policy::EvictionPolicy;

#[cfg(feature = "std")]
pub use clock::SystemClock;

#[cfg(feature = "concurrent")]
pub use concurrent::ConcurrentTtlCache;
