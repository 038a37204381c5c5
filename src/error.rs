//! Error Types
//!
//! The cache has exactly one failure class: an invalid argument at
//! construction, at the `default_ttl` mutator, or as an explicit TTL passed
//! to a put. Cache misses are not errors (they are `None`), and eviction is
//! routine behavior, not a failure.
//!
//! Every validation failure is raised synchronously by the call that caused
//! it and leaves no partial state change behind.

use thiserror::Error;

/// Validation errors for cache configuration and TTL arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CacheError {
    /// The configured capacity was zero. A cache must be able to hold at
    /// least one entry.
    #[error("cache capacity must be greater than zero")]
    ZeroCapacity,

    /// A TTL (default or per-put) was zero. Every entry must be valid for
    /// a strictly positive duration.
    #[error("ttl must be greater than zero")]
    ZeroTtl,
}
