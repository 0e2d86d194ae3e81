//! A single walking dog.

use pt_core::geo::heading_step;
use pt_core::{Millis, PawSlot, Point, WalkId};

/// One walking agent.
///
/// `heading`, `speed`, and `size` are fixed at spawn.  Only `position`,
/// `step_count`, and `last_step` change over the dog's life.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dog {
    pub id: WalkId,

    /// Centre of the dog in screen units.
    pub position: Point,

    /// Direction of travel in degrees.
    pub heading: f64,

    /// Screen units advanced per tick.
    pub speed: f64,

    /// Body scale; drives paw spacing and print size.
    pub size: f64,

    /// Prints emitted so far.  Selects the next paw via [`PawSlot::for_step`].
    pub step_count: u64,

    /// When the last print was emitted (spawn time before the first one).
    pub last_step: Millis,
}

impl Dog {
    /// A freshly spawned dog that has not stepped yet.
    pub fn new(id: WalkId, position: Point, heading: f64, speed: f64, size: f64, now: Millis) -> Self {
        Self {
            id,
            position,
            heading,
            speed,
            size,
            step_count: 0,
            last_step: now,
        }
    }

    /// Move `speed` units along the heading.
    #[inline]
    pub fn advance(&mut self) {
        self.position += heading_step(self.heading, self.speed);
    }

    /// `true` if strictly more than `threshold_ms` have passed since the
    /// last print.
    #[inline]
    pub fn step_due(&self, now: Millis, threshold_ms: f64) -> bool {
        now.since(self.last_step) as f64 > threshold_ms
    }

    /// The paw the next print will be placed with.
    #[inline]
    pub fn next_paw(&self) -> PawSlot {
        PawSlot::for_step(self.step_count)
    }

    /// Record a print at `now` and return the paw it used.
    pub fn take_step(&mut self, now: Millis) -> PawSlot {
        let slot = self.next_paw();
        self.step_count += 1;
        self.last_step = now;
        slot
    }
}
