//! Bounded TTL Cache Implementation
//!
//! A fixed-capacity key/value store in which every entry carries an
//! absolute expiry deadline. Expired entries behave as absent and are
//! purged lazily; when a put must make room, the configured
//! [`EvictionPolicy`] selects exactly one victim.
//!
//! # Structure
//!
//! Three views of the same entry set are kept in lock step:
//!
//! - `map`: key to [`CacheEntry`], the owning store.
//! - `ranking`: rank key to key, ordered by the eviction policy. The first
//!   element is always the next victim, so victim selection is O(log n).
//! - `expiry`: (deadline, insertion seq) to key, ordered by deadline, so
//!   purging expired entries is a prefix drain rather than a full scan.
//!
//! Every operation reads the clock once at entry and uses that single
//! timestamp throughout, so an operation can never disagree with itself
//! about which entries are expired.
//!
//! # Laziness
//!
//! There is no background sweeper and no per-entry timer. Expiry is
//! enforced at every `get` (for the looked-up key), at every `len`, and at
//! the `put` capacity check (for all entries). Purging all expired entries
//! before selecting a victim also implements the policy rule that an
//! already-expired entry is always preferred over any live one.

extern crate alloc;

use alloc::collections::BTreeMap;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;
use core::time::Duration;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

use crate::clock::{duration_to_nanos, Clock, DefaultClock};
use crate::config::TtlCacheConfig;
use crate::entry::CacheEntry;
use crate::error::CacheError;
use crate::metrics::{CacheMetrics, TtlCacheMetrics};
use crate::policy::{EvictionPolicy, RankKey};

#[cfg(feature = "std")]
use crate::clock::SystemClock;

/// A bounded key/value cache with per-entry TTL and pluggable eviction.
///
/// After any public operation completes, the number of live entries never
/// exceeds the configured capacity, and no expired entry is ever returned.
/// A `get` counts as an access (frequency and recency) but never extends
/// an entry's TTL; only re-`put` refreshes the deadline.
///
/// The cache owns its entries exclusively and performs no I/O; it is meant
/// to be used from one logical thread of control, or wrapped in the
/// `concurrent` cache when shared.
///
/// # Examples
///
/// ```
/// use ttl_cache_rs::{TtlCache, TtlCacheConfig};
/// use std::time::Duration;
///
/// let config = TtlCacheConfig::new(2, Duration::from_secs(60));
/// let mut cache = TtlCache::new(config).unwrap();
///
/// cache.put("a", 1);
/// cache.put("b", 2);
/// cache.get(&"a"); // "a" now has the higher access count
///
/// let evicted = cache.put("c", 3);
/// assert_eq!(evicted, Some(("b", 2)));
/// ```
pub struct TtlCache<K, V, S = DefaultHashBuilder, C = DefaultClock> {
    capacity: NonZeroUsize,
    default_ttl: u64,
    policy: EvictionPolicy,
    clock: C,

    /// Owning store, keyed by the user's key.
    map: HashMap<K, CacheEntry<V>, S>,

    /// Policy order over live entries; first element is the next victim.
    ranking: BTreeMap<RankKey, K>,

    /// Deadline order over live entries; expired entries form a prefix.
    expiry: BTreeMap<(u64, u64), K>,

    /// Shared sequence counter for insertion order and recency stamps.
    ticks: u64,

    metrics: TtlCacheMetrics,
}

#[cfg(feature = "std")]
impl<K: Hash + Eq + Clone, V> TtlCache<K, V> {
    /// Creates a cache driven by the wall clock.
    ///
    /// Fails with [`CacheError`] if the config has a zero capacity or a
    /// zero default TTL.
    pub fn new(config: TtlCacheConfig) -> Result<Self, CacheError> {
        Self::with_clock(config, SystemClock)
    }
}

impl<K: Hash + Eq + Clone, V, C: Clock> TtlCache<K, V, DefaultHashBuilder, C> {
    /// Creates a cache driven by the given clock.
    ///
    /// Tests normally pass a [`ManualClock`](crate::ManualClock) here so
    /// expiry can be exercised without sleeping.
    pub fn with_clock(config: TtlCacheConfig, clock: C) -> Result<Self, CacheError> {
        Self::with_hasher_and_clock(config, DefaultHashBuilder::default(), clock)
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher, C: Clock> TtlCache<K, V, S, C> {
    /// Creates a cache with an explicit hash builder and clock.
    pub fn with_hasher_and_clock(
        config: TtlCacheConfig,
        hash_builder: S,
        clock: C,
    ) -> Result<Self, CacheError> {
        let capacity = config.validate()?;
        let map_capacity = capacity.get().next_power_of_two();
        Ok(Self {
            capacity,
            default_ttl: duration_to_nanos(config.default_ttl),
            policy: config.policy,
            clock,
            map: HashMap::with_capacity_and_hasher(map_capacity, hash_builder),
            ranking: BTreeMap::new(),
            expiry: BTreeMap::new(),
            ticks: 0,
            metrics: TtlCacheMetrics::new(config.policy),
        })
    }

    /// Returns the maximum number of live entries the cache can hold.
    #[inline]
    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    /// Returns the eviction policy in effect.
    #[inline]
    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    /// Returns the TTL applied when a put does not supply one.
    #[inline]
    pub fn default_ttl(&self) -> Duration {
        Duration::from_nanos(self.default_ttl)
    }

    /// Replaces the default TTL.
    ///
    /// Fails with [`CacheError::ZeroTtl`] for a zero duration, in which
    /// case the prior value is kept. Entries already inserted keep the
    /// deadline they were given.
    pub fn set_default_ttl(&mut self, default_ttl: Duration) -> Result<(), CacheError> {
        if default_ttl.is_zero() {
            return Err(CacheError::ZeroTtl);
        }
        self.default_ttl = duration_to_nanos(default_ttl);
        Ok(())
    }

    /// Returns a reference to the cache's clock.
    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the number of currently valid (non-expired) entries.
    ///
    /// Reconciles lazily-expired entries before counting, so the result
    /// never overcounts relative to what `get` would observe. Takes `&mut
    /// self` for that reason.
    pub fn len(&mut self) -> usize {
        let now = self.clock.now();
        self.purge_expired(now);
        self.map.len()
    }

    /// Returns `true` if the cache holds no valid entries.
    pub fn is_empty(&mut self) -> bool {
        self.len() == 0
    }

    /// Inserts a key-value pair with the default TTL.
    ///
    /// If the key already exists, its value and deadline are replaced in
    /// place (capacity accounting unchanged) and the old pair is returned.
    /// If the key is new and the cache is full, the policy's victim is
    /// evicted and returned; insertion of the new entry never fails and
    /// never exceeds capacity.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        let ttl = self.default_ttl;
        self.insert(key, value, ttl)
    }

    /// Inserts a key-value pair with an explicit TTL.
    ///
    /// Fails with [`CacheError::ZeroTtl`] for a zero duration, leaving the
    /// cache untouched. Otherwise behaves exactly like [`put`](Self::put).
    pub fn put_with_ttl(
        &mut self,
        key: K,
        value: V,
        ttl: Duration,
    ) -> Result<Option<(K, V)>, CacheError> {
        if ttl.is_zero() {
            return Err(CacheError::ZeroTtl);
        }
        Ok(self.insert(key, value, duration_to_nanos(ttl)))
    }

    /// Returns a reference to the value for `key` and counts the access.
    ///
    /// An expired entry behaves as absent and is purged as a side effect.
    /// The access bumps the entry's count and recency but never extends
    /// its TTL.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let now = self.clock.now();
        if !self.check_live(key, now) {
            self.metrics.core.record_miss();
            return None;
        }

        let tick = self.next_tick();
        let moved = match self.map.get_mut(key) {
            Some(entry) => {
                let old_rank = self.policy.rank(entry);
                entry.record_hit(tick);
                let new_rank = self.policy.rank(entry);
                Some((old_rank, new_rank))
            }
            None => None,
        };
        if let Some((old_rank, new_rank)) = moved {
            if let Some(owned_key) = self.ranking.remove(&old_rank) {
                self.ranking.insert(new_rank, owned_key);
            }
        }

        self.metrics.core.record_hit();
        self.map.get(key).map(CacheEntry::value)
    }

    /// Returns a mutable reference to the value for `key`.
    ///
    /// Counts as an access, exactly like [`get`](Self::get).
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        // Reuse get() for the expiry check and rank maintenance.
        self.get(key)?;
        self.map.get_mut(key).map(|entry| &mut entry.value)
    }

    /// Returns the value for `key` without counting an access.
    ///
    /// Expired entries read as absent but are not purged; a later mutating
    /// operation will reclaim them.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let now = self.clock.now();
        self.map
            .get(key)
            .filter(|entry| !entry.is_expired(now))
            .map(CacheEntry::value)
    }

    /// Returns `true` if `key` maps to a valid (non-expired) entry.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.peek(key).is_some()
    }

    /// Returns the time left before `key` expires, if it is present and
    /// still valid.
    pub fn remaining_ttl<Q>(&self, key: &Q) -> Option<Duration>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let now = self.clock.now();
        self.map
            .get(key)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.remaining(now))
    }

    /// Removes the entry for `key`, returning its value if it was present
    /// and still valid.
    ///
    /// Calling this for an absent key is a no-op, so removing twice is the
    /// same as removing once. An expired entry is reclaimed but reported
    /// as absent.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let now = self.clock.now();
        let entry = self.map.remove(key)?;
        self.ranking.remove(&self.policy.rank(&entry));
        self.expiry.remove(&(entry.expires_at, entry.inserted));
        if entry.is_expired(now) {
            self.metrics.record_expiration();
            None
        } else {
            self.metrics.record_removal();
            Some(entry.into_value())
        }
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.map.clear();
        self.ranking.clear();
        self.expiry.clear();
    }

    /// Returns a snapshot of the cache's counters.
    #[inline]
    pub fn cache_metrics(&self) -> &TtlCacheMetrics {
        &self.metrics
    }

    #[inline]
    fn next_tick(&mut self) -> u64 {
        self.ticks += 1;
        self.ticks
    }

    /// Purges `key` if it is expired at `now`. Returns `true` when the key
    /// is present and live.
    fn check_live<Q>(&mut self, key: &Q, now: u64) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let expired = match self.map.get(key) {
            Some(entry) => entry.is_expired(now),
            None => return false,
        };
        if expired {
            if let Some(entry) = self.map.remove(key) {
                self.ranking.remove(&self.policy.rank(&entry));
                self.expiry.remove(&(entry.expires_at, entry.inserted));
                self.metrics.record_expiration();
            }
            return false;
        }
        true
    }

    /// Drains every entry whose deadline has passed at `now`. The expiry
    /// index is deadline-ordered, so this stops at the first live entry.
    fn purge_expired(&mut self, now: u64) {
        while let Some((&(expires_at, inserted), _)) = self.expiry.iter().next() {
            if expires_at > now {
                break;
            }
            if let Some(key) = self.expiry.remove(&(expires_at, inserted)) {
                if let Some(entry) = self.map.remove(&key) {
                    self.ranking.remove(&self.policy.rank(&entry));
                    self.metrics.record_expiration();
                }
            }
        }
    }

    /// Removes and returns the policy's victim. Caller has already purged
    /// expired entries, so the minimum rank is a live entry.
    fn evict_one(&mut self) -> Option<(K, V)> {
        let (&rank, _) = self.ranking.iter().next()?;
        let key = self.ranking.remove(&rank)?;
        let entry = self.map.remove(&key)?;
        self.expiry.remove(&(entry.expires_at, entry.inserted));
        self.metrics.core.record_eviction();
        Some((key, entry.into_value()))
    }

    fn insert(&mut self, key: K, value: V, ttl_nanos: u64) -> Option<(K, V)> {
        let now = self.clock.now();
        self.purge_expired(now);
        let expires_at = now.saturating_add(ttl_nanos);

        // Existing key: replace value and deadline in place. Frequency and
        // insertion order survive, mirroring how an LFU keeps an updated
        // entry's standing.
        if let Some(entry) = self.map.get_mut(&key) {
            let old_rank = self.policy.rank(entry);
            let old_deadline = (entry.expires_at, entry.inserted);
            let old_value = entry.refresh(value, expires_at);
            let new_rank = self.policy.rank(entry);
            let new_deadline = (entry.expires_at, entry.inserted);

            if let Some(owned_key) = self.ranking.remove(&old_rank) {
                self.ranking.insert(new_rank, owned_key);
            }
            if let Some(owned_key) = self.expiry.remove(&old_deadline) {
                self.expiry.insert(new_deadline, owned_key);
            }
            self.metrics.core.record_update();
            return Some((key, old_value));
        }

        let evicted = if self.map.len() >= self.capacity.get() {
            self.evict_one()
        } else {
            None
        };

        let seq = self.next_tick();
        let entry = CacheEntry::new(value, expires_at, seq);
        self.ranking.insert(self.policy.rank(&entry), key.clone());
        self.expiry.insert((expires_at, seq), key.clone());
        self.map.insert(key, entry);
        self.metrics.core.record_insertion();

        evicted
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher, C: Clock> CacheMetrics for TtlCache<K, V, S, C> {
    fn metrics(&self) -> alloc::collections::BTreeMap<alloc::string::String, f64> {
        self.metrics.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<K, V, S, C> fmt::Debug for TtlCache<K, V, S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TtlCache")
            .field("capacity", &self.capacity)
            .field("len", &self.map.len())
            .field("policy", &self.policy)
            .field("default_ttl", &Duration::from_nanos(self.default_ttl))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::clock::ManualClock;

    const TTL: Duration = Duration::from_secs(60);

    fn make_cache<K: Hash + Eq + Clone, V>(
        cap: usize,
        policy: EvictionPolicy,
    ) -> TtlCache<K, V, DefaultHashBuilder, ManualClock> {
        let config = TtlCacheConfig::new(cap, TTL).with_policy(policy);
        TtlCache::with_clock(config, ManualClock::new()).unwrap()
    }

    #[test]
    fn test_put_then_get() {
        let mut cache = make_cache(3, EvictionPolicy::Lfu);
        assert_eq!(cache.put("a", 1), None);
        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_absent_is_none_not_error() {
        let mut cache = make_cache::<&str, i32>(3, EvictionPolicy::Lfu);
        assert_eq!(cache.get(&"missing"), None);
    }

    #[test]
    fn test_expired_entry_reads_as_absent_and_is_purged() {
        let mut cache = make_cache(3, EvictionPolicy::Lfu);
        cache.put_with_ttl("a", 1, Duration::from_secs(1)).unwrap();
        cache.clock().advance(Duration::from_secs(2));

        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.cache_metrics().expired_removals, 1);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_get_does_not_extend_ttl() {
        let mut cache = make_cache(3, EvictionPolicy::Lfu);
        cache.put_with_ttl("a", 1, Duration::from_secs(2)).unwrap();

        cache.clock().advance(Duration::from_secs(1));
        assert_eq!(cache.get(&"a"), Some(&1));

        // A second past the original deadline; the read above must not
        // have pushed it out.
        cache.clock().advance(Duration::from_secs(1));
        assert_eq!(cache.get(&"a"), None);
    }

    #[test]
    fn test_reput_refreshes_ttl() {
        let mut cache = make_cache(3, EvictionPolicy::Lfu);
        cache.put_with_ttl("a", 1, Duration::from_secs(2)).unwrap();
        cache.clock().advance(Duration::from_secs(1));
        cache.put_with_ttl("a", 2, Duration::from_secs(2)).unwrap();
        cache.clock().advance(Duration::from_secs(1));

        // Original deadline has passed but the re-put moved it.
        assert_eq!(cache.get(&"a"), Some(&2));
    }

    #[test]
    fn test_replace_at_capacity_does_not_evict() {
        let mut cache = make_cache(2, EvictionPolicy::Lfu);
        cache.put("a", 1);
        cache.put("b", 2);

        let displaced = cache.put("a", 10);
        assert_eq!(displaced, Some(("a", 1)));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"a"), Some(&10));
        assert_eq!(cache.get(&"b"), Some(&2));
        assert_eq!(cache.cache_metrics().core.evictions, 0);
    }

    #[test]
    fn test_lfu_evicts_lowest_access_count() {
        let mut cache = make_cache(2, EvictionPolicy::Lfu);
        cache.put("a", 1);
        cache.put("b", 2);
        cache.get(&"a");

        let evicted = cache.put("c", 3);
        assert_eq!(evicted, Some(("b", 2)));
        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.get(&"c"), Some(&3));
    }

    #[test]
    fn test_lfu_tie_broken_by_soonest_expiry() {
        let mut cache = make_cache(2, EvictionPolicy::Lfu);
        cache.put_with_ttl("late", 1, Duration::from_secs(90)).unwrap();
        cache.put_with_ttl("soon", 2, Duration::from_secs(30)).unwrap();

        // Equal access counts; "soon" expires first and loses.
        let evicted = cache.put("c", 3);
        assert_eq!(evicted, Some(("soon", 2)));
    }

    #[test]
    fn test_lfu_final_tie_broken_by_oldest_insertion() {
        let mut cache = make_cache(2, EvictionPolicy::Lfu);
        // Identical counts and deadlines (clock does not move).
        cache.put("first", 1);
        cache.put("second", 2);

        let evicted = cache.put("c", 3);
        assert_eq!(evicted, Some(("first", 1)));
    }

    #[test]
    fn test_expired_preferred_over_live_at_capacity() {
        let mut cache = make_cache(2, EvictionPolicy::Lfu);
        cache.put_with_ttl("dying", 1, Duration::from_secs(1)).unwrap();
        cache.put("live", 2);
        // Give "live" the lower access standing so only lazy expiry can
        // explain "dying" leaving first.
        cache.get(&"dying");
        cache.get(&"dying");

        cache.clock().advance(Duration::from_secs(2));
        let evicted = cache.put("c", 3);

        // The expired entry was purged, not evicted, so put reports None.
        assert_eq!(evicted, None);
        assert_eq!(cache.get(&"live"), Some(&2));
        assert_eq!(cache.get(&"c"), Some(&3));
        assert_eq!(cache.cache_metrics().expired_removals, 1);
    }

    #[test]
    fn test_lru_evicts_least_recently_used() {
        let mut cache = make_cache(2, EvictionPolicy::Lru);
        cache.put("a", 1);
        cache.put("b", 2);
        cache.get(&"a"); // "b" is now least recently used

        let evicted = cache.put("c", 3);
        assert_eq!(evicted, Some(("b", 2)));
    }

    #[test]
    fn test_ttl_soonest_evicts_first_to_expire() {
        let mut cache = make_cache(2, EvictionPolicy::TtlSoonest);
        cache.put_with_ttl("late", 1, Duration::from_secs(90)).unwrap();
        cache.put_with_ttl("soon", 2, Duration::from_secs(30)).unwrap();
        // Access counts are irrelevant to this policy.
        cache.get(&"soon");
        cache.get(&"soon");

        let evicted = cache.put("c", 3);
        assert_eq!(evicted, Some(("soon", 2)));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cache = make_cache(3, EvictionPolicy::Lfu);
        cache.put("a", 1);
        assert_eq!(cache.remove(&"a"), Some(1));
        assert_eq!(cache.remove(&"a"), None);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_remove_expired_reports_absent() {
        let mut cache = make_cache(3, EvictionPolicy::Lfu);
        cache.put_with_ttl("a", 1, Duration::from_secs(1)).unwrap();
        cache.clock().advance(Duration::from_secs(2));
        assert_eq!(cache.remove(&"a"), None);
        assert_eq!(cache.cache_metrics().expired_removals, 1);
    }

    #[test]
    fn test_clear() {
        let mut cache = make_cache(3, EvictionPolicy::Lfu);
        cache.put("a", 1);
        cache.put("b", 2);
        cache.clear();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.get(&"a"), None);

        cache.put("c", 3);
        assert_eq!(cache.get(&"c"), Some(&3));
    }

    #[test]
    fn test_len_excludes_expired() {
        let mut cache = make_cache(4, EvictionPolicy::Lfu);
        cache.put_with_ttl("a", 1, Duration::from_secs(1)).unwrap();
        cache.put_with_ttl("b", 2, Duration::from_secs(10)).unwrap();
        assert_eq!(cache.len(), 2);

        cache.clock().advance(Duration::from_secs(5));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_capacity_never_exceeded() {
        let mut cache = make_cache(3, EvictionPolicy::Lfu);
        for i in 0..50 {
            cache.put(i, i);
            assert!(cache.len() <= 3);
        }
    }

    #[test]
    fn test_put_with_zero_ttl_rejected() {
        let mut cache = make_cache(3, EvictionPolicy::Lfu);
        assert_eq!(
            cache.put_with_ttl("a", 1, Duration::ZERO),
            Err(CacheError::ZeroTtl)
        );
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_set_default_ttl_keeps_prior_value_on_failure() {
        let mut cache = make_cache::<&str, i32>(3, EvictionPolicy::Lfu);
        assert_eq!(cache.set_default_ttl(Duration::ZERO), Err(CacheError::ZeroTtl));
        assert_eq!(cache.default_ttl(), TTL);

        cache.set_default_ttl(Duration::from_secs(7)).unwrap();
        assert_eq!(cache.default_ttl(), Duration::from_secs(7));
    }

    #[test]
    fn test_peek_does_not_count_as_access() {
        let mut cache = make_cache(2, EvictionPolicy::Lfu);
        cache.put("a", 1);
        cache.put("b", 2);
        assert_eq!(cache.peek(&"a"), Some(&1));
        cache.get(&"b");

        // "a" was only peeked, so it still has the lower access count.
        let evicted = cache.put("c", 3);
        assert_eq!(evicted, Some(("a", 1)));
    }

    #[test]
    fn test_get_mut_counts_as_access() {
        let mut cache = make_cache(2, EvictionPolicy::Lfu);
        cache.put("a", 1);
        cache.put("b", 2);
        if let Some(value) = cache.get_mut(&"a") {
            *value = 10;
        }

        let evicted = cache.put("c", 3);
        assert_eq!(evicted, Some(("b", 2)));
        assert_eq!(cache.get(&"a"), Some(&10));
    }

    #[test]
    fn test_remaining_ttl() {
        let mut cache = make_cache(3, EvictionPolicy::Lfu);
        cache.put_with_ttl("a", 1, Duration::from_secs(10)).unwrap();
        cache.clock().advance(Duration::from_secs(4));
        assert_eq!(cache.remaining_ttl(&"a"), Some(Duration::from_secs(6)));

        cache.clock().advance(Duration::from_secs(7));
        assert_eq!(cache.remaining_ttl(&"a"), None);
    }

    #[test]
    fn test_metrics_counters() {
        let mut cache = make_cache(2, EvictionPolicy::Lfu);
        cache.put("a", 1);
        cache.put("a", 2);
        cache.put("b", 3);
        cache.get(&"a");
        cache.get(&"missing");
        cache.put("c", 4); // evicts "b"
        cache.remove(&"a");

        let m = cache.cache_metrics();
        assert_eq!(m.core.insertions, 3);
        assert_eq!(m.core.updates, 1);
        assert_eq!(m.core.hits, 1);
        assert_eq!(m.core.requests, 2);
        assert_eq!(m.core.evictions, 1);
        assert_eq!(m.explicit_removals, 1);
        assert_eq!(cache.algorithm_name(), "LFU");
    }

    #[test]
    fn test_deterministic_victim_for_same_state() {
        for _ in 0..3 {
            let mut cache = make_cache(3, EvictionPolicy::Lfu);
            cache.put("a", 1);
            cache.put("b", 2);
            cache.put("c", 3);
            cache.get(&"a");
            cache.get(&"c");
            let evicted = cache.put("d", 4);
            assert_eq!(evicted, Some(("b", 2)));
        }
    }
}
