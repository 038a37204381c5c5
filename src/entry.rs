//! Cache Entry Type
//!
//! This module provides the `CacheEntry<V>` structure that holds a cached
//! value together with the bookkeeping the eviction policies rank by: the
//! absolute expiry deadline, the access count, and the insertion/recency
//! sequence numbers.
//!
//! # Design Philosophy
//!
//! Expiry is a pure function of the stored deadline and the caller-supplied
//! current time. Entries never consult a clock themselves, which is what
//! makes eviction and expiry reproducible in tests: given the same entry set
//! and the same `now`, every predicate here returns the same answer.
//!
//! # Memory Layout
//!
//! Each entry has the following overhead beyond the value:
//! - `expires_at: u64` - 8 bytes (absolute deadline, clock nanoseconds)
//! - `access_count: u64` - 8 bytes (successful reads since insertion)
//! - `inserted: u64` - 8 bytes (insertion sequence number)
//! - `last_touched: u64` - 8 bytes (recency sequence number)

use core::mem;
use core::time::Duration;

/// A cached value plus the metadata the eviction policies rank by.
///
/// The key is not stored here; it lives in the cache's map and ordered
/// indexes. Sequence numbers are logical (one shared counter in the owning
/// cache), not wall-clock times, so two entries never compare equal on a
/// full rank key.
///
/// # Examples
///
/// ```
/// use ttl_cache_rs::CacheEntry;
///
/// let entry = CacheEntry::new(42, 1_000, 1);
/// assert_eq!(*entry.value(), 42);
/// assert_eq!(entry.access_count(), 0);
/// assert!(!entry.is_expired(999));
/// assert!(entry.is_expired(1_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry<V> {
    /// The cached value.
    pub(crate) value: V,

    /// Absolute deadline in clock nanoseconds. The entry is invalid once
    /// the clock reaches this instant.
    pub(crate) expires_at: u64,

    /// Number of successful reads since insertion.
    pub(crate) access_count: u64,

    /// Insertion sequence number. Stable across value replacement; the
    /// final eviction tie-break (oldest insertion loses).
    pub(crate) inserted: u64,

    /// Sequence number of the most recent insertion or read. Drives the
    /// recency-biased policy.
    pub(crate) last_touched: u64,
}

impl<V> CacheEntry<V> {
    /// Creates a new entry with zero reads, expiring at `expires_at`.
    ///
    /// `seq` is the insertion sequence number and doubles as the initial
    /// recency stamp.
    #[inline]
    pub fn new(value: V, expires_at: u64, seq: u64) -> Self {
        Self {
            value,
            expires_at,
            access_count: 0,
            inserted: seq,
            last_touched: seq,
        }
    }

    /// Returns a reference to the cached value.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the absolute expiry deadline in clock nanoseconds.
    #[inline]
    pub fn expires_at(&self) -> u64 {
        self.expires_at
    }

    /// Returns the number of successful reads since insertion.
    #[inline]
    pub fn access_count(&self) -> u64 {
        self.access_count
    }

    /// Returns `true` if the entry is no longer valid at `now`.
    ///
    /// An entry expires at exactly its deadline: `is_expired(expires_at)`
    /// is `true`.
    #[inline]
    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.expires_at
    }

    /// Returns the time left before expiry at `now`, or [`Duration::ZERO`]
    /// if the entry has already expired.
    #[inline]
    pub fn remaining(&self, now: u64) -> Duration {
        Duration::from_nanos(self.expires_at.saturating_sub(now))
    }

    /// Records a successful read: bumps the access count and refreshes the
    /// recency stamp. Does not touch the expiry deadline.
    #[inline]
    pub(crate) fn record_hit(&mut self, tick: u64) {
        self.access_count += 1;
        self.last_touched = tick;
    }

    /// Replaces the value and expiry deadline in place, returning the old
    /// value. Access count and insertion order survive a replacement.
    #[inline]
    pub(crate) fn refresh(&mut self, value: V, expires_at: u64) -> V {
        self.expires_at = expires_at;
        mem::replace(&mut self.value, value)
    }

    /// Consumes the entry, returning the value.
    #[inline]
    pub(crate) fn into_value(self) -> V {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry() {
        let entry = CacheEntry::new("payload", 500, 7);
        assert_eq!(*entry.value(), "payload");
        assert_eq!(entry.expires_at(), 500);
        assert_eq!(entry.access_count(), 0);
        assert_eq!(entry.inserted, 7);
        assert_eq!(entry.last_touched, 7);
    }

    #[test]
    fn test_expiry_is_inclusive_at_deadline() {
        let entry = CacheEntry::new(1, 100, 1);
        assert!(!entry.is_expired(99));
        assert!(entry.is_expired(100));
        assert!(entry.is_expired(101));
    }

    #[test]
    fn test_remaining_saturates_at_zero() {
        let entry = CacheEntry::new(1, 100, 1);
        assert_eq!(entry.remaining(40), Duration::from_nanos(60));
        assert_eq!(entry.remaining(100), Duration::ZERO);
        assert_eq!(entry.remaining(200), Duration::ZERO);
    }

    #[test]
    fn test_record_hit_updates_count_and_recency() {
        let mut entry = CacheEntry::new(1, 100, 1);
        entry.record_hit(5);
        entry.record_hit(9);
        assert_eq!(entry.access_count(), 2);
        assert_eq!(entry.last_touched, 9);
        assert_eq!(entry.inserted, 1);
    }

    #[test]
    fn test_refresh_keeps_count_and_insertion_order() {
        let mut entry = CacheEntry::new(1, 100, 1);
        entry.record_hit(3);

        let old = entry.refresh(2, 900);
        assert_eq!(old, 1);
        assert_eq!(*entry.value(), 2);
        assert_eq!(entry.expires_at(), 900);
        assert_eq!(entry.access_count(), 1);
        assert_eq!(entry.inserted, 1);
    }
}
