//! Eviction Policy Engine
//!
//! This module defines the pluggable eviction policies and the total order
//! each one imposes on live entries. A policy maps an entry to a rank key;
//! the entry with the smallest rank key is the next victim.
//!
//! # Rank Keys
//!
//! | Policy | Primary | Secondary | Tie-break |
//! |--------|---------|-----------|-----------|
//! | `Lfu` | access count | expiry deadline | insertion order |
//! | `Lru` | recency stamp | - | insertion order |
//! | `TtlSoonest` | expiry deadline | - | insertion order |
//!
//! The insertion sequence number is unique per entry, so rank keys are
//! unique and victim selection is deterministic: the same entry set at the
//! same time always yields the same victim.
//!
//! Entries that have already expired are not ranked at all; the cache
//! purges them before asking a policy for a victim, so an expired entry
//! always loses to a live one.

use crate::entry::CacheEntry;

/// Totally ordered rank under a policy. Smallest ranks evict first; the
/// trailing sequence number makes every rank unique.
pub(crate) type RankKey = (u64, u64, u64);

/// Eviction policy selecting the victim when a `put` must make room.
///
/// The frequency-biased [`Lfu`](EvictionPolicy::Lfu) variant is the
/// default.
///
/// # Examples
///
/// ```
/// use ttl_cache_rs::EvictionPolicy;
///
/// assert_eq!(EvictionPolicy::default(), EvictionPolicy::Lfu);
/// assert_eq!(EvictionPolicy::Lru.name(), "LRU");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EvictionPolicy {
    /// Evict the least recently used entry; ties broken by oldest
    /// insertion.
    Lru,

    /// Evict the entry with the lowest access count; ties broken by
    /// soonest expiry, then oldest insertion.
    #[default]
    Lfu,

    /// Evict the entry whose expiry deadline is soonest; ties broken by
    /// oldest insertion.
    TtlSoonest,
}

impl EvictionPolicy {
    /// Short display name of the policy.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            EvictionPolicy::Lru => "LRU",
            EvictionPolicy::Lfu => "LFU",
            EvictionPolicy::TtlSoonest => "TTL",
        }
    }

    /// Computes the rank key of a live entry under this policy.
    #[inline]
    pub(crate) fn rank<V>(&self, entry: &CacheEntry<V>) -> RankKey {
        match self {
            EvictionPolicy::Lru => (entry.last_touched, 0, entry.inserted),
            EvictionPolicy::Lfu => (entry.access_count, entry.expires_at, entry.inserted),
            EvictionPolicy::TtlSoonest => (entry.expires_at, 0, entry.inserted),
        }
    }
}
