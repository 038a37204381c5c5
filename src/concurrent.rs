//! Concurrent Cache Wrapper
//!
//! A thread-safe wrapper around [`TtlCache`] guarded by a single
//! `parking_lot::Mutex`. Every public operation acquires the lock for its
//! full duration, so no operation is ever observed partially applied by
//! another caller; atomicity is at operation granularity, not finer.
//!
//! ## Why One Mutex, and Why Not RwLock?
//!
//! A `get` is a write here: it bumps the access count, refreshes recency,
//! and may purge an expired entry, all of which move the entry inside the
//! eviction indexes. Since reads mutate, a read/write lock would serialize
//! exactly as a mutex does while costing more bookkeeping. And because the
//! eviction policy ranks entries globally (the least-frequently-used entry
//! of the whole cache, not of a shard), the key space is not partitioned
//! into independently locked segments.
//!
//! No operation blocks on I/O or suspends while holding the lock; all
//! complete in bounded time.
//!
//! Available with the `concurrent` feature.
//!
//! # Example
//!
//! ```
//! use ttl_cache_rs::concurrent::ConcurrentTtlCache;
//! use ttl_cache_rs::TtlCacheConfig;
//! use std::sync::Arc;
//! use std::thread;
//! use std::time::Duration;
//!
//! let config = TtlCacheConfig::new(100, Duration::from_secs(60));
//! let cache = Arc::new(ConcurrentTtlCache::new(config).unwrap());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let cache = Arc::clone(&cache);
//!         thread::spawn(move || {
//!             for i in 0..100 {
//!                 cache.put((t, i), i);
//!                 let _ = cache.get(&(t, i));
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert!(cache.len() <= 100);
//! ```

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;
use core::time::Duration;

use parking_lot::Mutex;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

use crate::cache::TtlCache;
use crate::clock::{Clock, DefaultClock};
use crate::config::TtlCacheConfig;
use crate::error::CacheError;
use crate::metrics::CacheMetrics;
use crate::policy::EvictionPolicy;

#[cfg(feature = "std")]
use crate::clock::SystemClock;

/// A thread-safe bounded TTL cache.
///
/// Semantics are identical to [`TtlCache`]; the only differences are that
/// all methods take `&self` and that [`get`](Self::get) returns a clone of
/// the value, since the lock is released before returning.
pub struct ConcurrentTtlCache<K, V, S = DefaultHashBuilder, C = DefaultClock> {
    inner: Mutex<TtlCache<K, V, S, C>>,
}

#[cfg(feature = "std")]
impl<K: Hash + Eq + Clone, V: Clone> ConcurrentTtlCache<K, V> {
    /// Creates a thread-safe cache driven by the wall clock.
    pub fn new(config: TtlCacheConfig) -> Result<Self, CacheError> {
        Ok(Self {
            inner: Mutex::new(TtlCache::with_clock(config, SystemClock)?),
        })
    }
}

impl<K: Hash + Eq + Clone, V: Clone, C: Clock> ConcurrentTtlCache<K, V, DefaultHashBuilder, C> {
    /// Creates a thread-safe cache driven by the given clock.
    pub fn with_clock(config: TtlCacheConfig, clock: C) -> Result<Self, CacheError> {
        Ok(Self {
            inner: Mutex::new(TtlCache::with_clock(config, clock)?),
        })
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher, C: Clock> ConcurrentTtlCache<K, V, S, C> {
    /// Creates a thread-safe cache with an explicit hash builder and clock.
    pub fn with_hasher_and_clock(
        config: TtlCacheConfig,
        hash_builder: S,
        clock: C,
    ) -> Result<Self, CacheError> {
        Ok(Self {
            inner: Mutex::new(TtlCache::with_hasher_and_clock(config, hash_builder, clock)?),
        })
    }

    /// Returns the maximum number of live entries the cache can hold.
    pub fn capacity(&self) -> NonZeroUsize {
        self.inner.lock().capacity()
    }

    /// Returns the eviction policy in effect.
    pub fn policy(&self) -> EvictionPolicy {
        self.inner.lock().policy()
    }

    /// Returns the TTL applied when a put does not supply one.
    pub fn default_ttl(&self) -> Duration {
        self.inner.lock().default_ttl()
    }

    /// Replaces the default TTL; the prior value is kept on failure.
    pub fn set_default_ttl(&self, default_ttl: Duration) -> Result<(), CacheError> {
        self.inner.lock().set_default_ttl(default_ttl)
    }

    /// Returns the number of currently valid (non-expired) entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the cache holds no valid entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Inserts a key-value pair with the default TTL. See
    /// [`TtlCache::put`].
    pub fn put(&self, key: K, value: V) -> Option<(K, V)> {
        self.inner.lock().put(key, value)
    }

    /// Inserts a key-value pair with an explicit TTL. See
    /// [`TtlCache::put_with_ttl`].
    pub fn put_with_ttl(
        &self,
        key: K,
        value: V,
        ttl: Duration,
    ) -> Result<Option<(K, V)>, CacheError> {
        self.inner.lock().put_with_ttl(key, value, ttl)
    }

    /// Returns a clone of the value for `key`, counting the access.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Returns a clone of the value for `key` without counting an access.
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().peek(key).cloned()
    }

    /// Returns `true` if `key` maps to a valid (non-expired) entry.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().contains_key(key)
    }

    /// Returns the time left before `key` expires, if it is present and
    /// still valid.
    pub fn remaining_ttl<Q>(&self, key: &Q) -> Option<Duration>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().remaining_ttl(key)
    }

    /// Removes the entry for `key`, returning its value if it was present
    /// and still valid.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.lock().remove(key)
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.inner.lock().clear()
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher, C: Clock> CacheMetrics
    for ConcurrentTtlCache<K, V, S, C>
{
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.inner.lock().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.inner.lock().cache_metrics().algorithm_name()
    }
}

impl<K, V, S, C> fmt::Debug for ConcurrentTtlCache<K, V, S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentTtlCache").finish_non_exhaustive()
    }
}
