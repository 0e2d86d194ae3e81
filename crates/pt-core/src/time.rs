//! Time model: wall-clock milliseconds for aging, ticks for frame counting.
//!
//! # Design
//!
//! Two independent notions of time coexist:
//!
//! - [`Millis`] — a monotonic millisecond timestamp read from a [`Clock`].
//!   Print ages, step gating, and driver deadlines are all expressed in it.
//! - [`Tick`] — a frame counter advanced once per simulation tick.  Motion is
//!   per-tick (speed is units per frame), so the tick count and the clock are
//!   deliberately decoupled.
//!
//! The clock is a collaborator, not state: the simulation asks it for "now"
//! and asks it to wait for the next deadline.  [`ManualClock`] makes waiting
//! instantaneous (tests, headless replays); [`MonotonicClock`] sleeps.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

// ── Millis ───────────────────────────────────────────────────────────────────

/// A monotonic timestamp in milliseconds since an arbitrary origin.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    /// Milliseconds elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// The timestamp `ms` milliseconds after `self`.
    #[inline]
    pub fn offset(self, ms: u64) -> Millis {
        Millis(self.0.saturating_add(ms))
    }
}

impl std::ops::Add<u64> for Millis {
    type Output = Millis;
    #[inline]
    fn add(self, rhs: u64) -> Millis {
        self.offset(rhs)
    }
}

impl std::ops::Sub for Millis {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Millis) -> u64 {
        self.since(rhs)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Number of frames the simulation clock has processed.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Clock ────────────────────────────────────────────────────────────────────

/// Source of "now" for the simulation.
pub trait Clock {
    /// Current monotonic time.
    fn now(&self) -> Millis;

    /// Block (or jump) until `now() >= deadline`.  Returns immediately if the
    /// deadline has already passed.
    fn wait_until(&self, deadline: Millis);
}

/// A clock that only moves when told to.
///
/// Clones share the same underlying counter, so a test can keep one handle
/// and give another to the simulation.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(start: Millis) -> Self {
        Self { now: Arc::new(AtomicU64::new(start.0)) }
    }

    /// Jump to `t`.  Moving backwards is ignored; the clock is monotonic.
    pub fn set(&self, t: Millis) {
        self.now.fetch_max(t.0, Ordering::AcqRel);
    }

    /// Move forward by `ms` and return the new time.
    pub fn advance(&self, ms: u64) -> Millis {
        Millis(self.now.fetch_add(ms, Ordering::AcqRel) + ms)
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> Millis {
        Millis(self.now.load(Ordering::Acquire))
    }

    fn wait_until(&self, deadline: Millis) {
        self.set(deadline);
    }
}

/// Real elapsed time since construction, backed by [`Instant`].
#[derive(Clone, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Millis {
        Millis(self.origin.elapsed().as_millis() as u64)
    }

    fn wait_until(&self, deadline: Millis) {
        let remaining = deadline.since(self.now());
        if remaining > 0 {
            std::thread::sleep(Duration::from_millis(remaining));
        }
    }
}
