//! Cache Configuration
//!
//! Construction takes two required values, `capacity` and `default_ttl`,
//! plus the eviction policy. Both values are validated with the same
//! positivity rule enforced everywhere else in the lifecycle: a zero
//! capacity or a zero TTL is rejected up front with a [`CacheError`], and
//! no cache is constructed from an invalid config.
//!
//! # Examples
//!
//! ```
//! use ttl_cache_rs::{EvictionPolicy, TtlCache, TtlCacheConfig};
//! use std::time::Duration;
//!
//! let config = TtlCacheConfig::new(100, Duration::from_secs(30))
//!     .with_policy(EvictionPolicy::Lru);
//! let cache: TtlCache<&str, i32> = TtlCache::new(config).unwrap();
//! assert_eq!(cache.capacity().get(), 100);
//! ```

use core::num::NonZeroUsize;
use core::time::Duration;

use crate::error::CacheError;
use crate::policy::EvictionPolicy;

/// Configuration for a [`TtlCache`](crate::TtlCache).
///
/// Fields are public for simple instantiation; validation happens when the
/// cache is constructed, not when the struct is built, so an invalid config
/// can exist but can never become a cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtlCacheConfig {
    /// Maximum number of live entries. Must be greater than zero.
    pub capacity: usize,

    /// TTL applied when a put does not supply one. Must be strictly
    /// positive.
    pub default_ttl: Duration,

    /// Eviction policy used when a put must make room.
    pub policy: EvictionPolicy,
}

impl TtlCacheConfig {
    /// Creates a config with the default (LFU) eviction policy.
    pub fn new(capacity: usize, default_ttl: Duration) -> Self {
        Self {
            capacity,
            default_ttl,
            policy: EvictionPolicy::default(),
        }
    }

    /// Replaces the eviction policy.
    #[must_use]
    pub fn with_policy(mut self, policy: EvictionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Checks the positivity rules and returns the capacity as a
    /// [`NonZeroUsize`] proof.
    pub fn validate(&self) -> Result<NonZeroUsize, CacheError> {
        let capacity = NonZeroUsize::new(self.capacity).ok_or(CacheError::ZeroCapacity)?;
        if self.default_ttl.is_zero() {
            return Err(CacheError::ZeroTtl);
        }
        Ok(capacity)
    }
}
