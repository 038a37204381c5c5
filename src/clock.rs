//! Time Sources
//!
//! The cache never schedules timers; it only ever asks "what time is it
//! now?" at the start of an operation. This module provides that question
//! as a trait so expiry can be driven by the wall clock in production and
//! by a hand-advanced counter in tests.
//!
//! # Available Clocks
//!
//! | Clock | Availability | Description |
//! |-------|--------------|-------------|
//! | [`SystemClock`] | `std` feature | nanoseconds since `UNIX_EPOCH` |
//! | [`ManualClock`] | always | atomic counter advanced explicitly |
//!
//! Timestamps are plain `u64` nanoseconds on whatever timeline the clock
//! defines; the cache only compares them and adds TTL durations to them.

use core::sync::atomic::{AtomicU64, Ordering};
use core::time::Duration;

extern crate alloc;

/// A monotonic-enough source of "now" in nanoseconds.
///
/// Implementations must be cheap to call and must never go backwards while
/// a cache is using them; expiry deadlines are compared against the value
/// returned here.
pub trait Clock {
    /// Returns the current time in nanoseconds on this clock's timeline.
    fn now(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for alloc::sync::Arc<C> {
    #[inline]
    fn now(&self) -> u64 {
        (**self).now()
    }
}

/// Wall-clock time: nanoseconds since `UNIX_EPOCH`.
///
/// Available with the `std` feature.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> u64 {
        extern crate std;
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
            .unwrap_or(0)
    }
}

/// A clock that only moves when told to.
///
/// Backed by an atomic counter, so it can be shared (for example via
/// `Arc`) between a test and the cache under test, and works in `no_std`
/// builds where no wall clock exists.
///
/// # Examples
///
/// ```
/// use ttl_cache_rs::{Clock, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// assert_eq!(clock.now(), 0);
/// clock.advance(Duration::from_secs(3));
/// assert_eq!(clock.now(), 3_000_000_000);
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    nanos: AtomicU64,
}

impl ManualClock {
    /// Creates a clock starting at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clock starting at the given nanosecond timestamp.
    pub fn starting_at(nanos: u64) -> Self {
        Self {
            nanos: AtomicU64::new(nanos),
        }
    }

    /// Moves the clock forward by `delta`, saturating at `u64::MAX`.
    pub fn advance(&self, delta: Duration) {
        let nanos = duration_to_nanos(delta);
        self.nanos
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |now| {
                Some(now.saturating_add(nanos))
            })
            .ok();
    }

    /// Sets the clock to an absolute nanosecond timestamp.
    pub fn set(&self, nanos: u64) {
        self.nanos.store(nanos, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> u64 {
        self.nanos.load(Ordering::Relaxed)
    }
}

/// Default clock for caches that don't specify one: the wall clock when
/// `std` is available, otherwise a manual clock.
#[cfg(feature = "std")]
pub type DefaultClock = SystemClock;

/// Default clock for caches that don't specify one: the wall clock when
/// `std` is available, otherwise a manual clock.
#[cfg(not(feature = "std"))]
pub type DefaultClock = ManualClock;

/// Converts a [`Duration`] to whole nanoseconds, saturating at `u64::MAX`.
#[inline]
pub(crate) fn duration_to_nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}
