//! A single paw print.

use pt_core::geo::paw_position;
use pt_core::{Millis, PawSlot, Point, PrintId, RandomSource, WalkId};

/// Maximum rotation jitter either side of the dog's heading, in degrees.
pub const ROTATION_JITTER: f64 = 15.0;

/// Print icon size range in pixels for a dog of size 1.
pub const BASE_SIZE: (f64, f64) = (18.0, 26.0);

/// An immutable footprint mark.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Print {
    pub id: PrintId,

    /// Where the mark sits on screen.
    pub position: Point,

    /// Icon rotation in degrees.
    pub rotation: f64,

    /// Icon edge length in pixels.
    pub size: f64,

    pub created_at: Millis,

    pub paw: PawSlot,

    /// The dog that left this print.  A lookup key only; the dog may already
    /// be gone.
    pub walk: WalkId,
}

impl Print {
    /// Stamp a print for `slot` of a dog centred on `center`.
    ///
    /// Draws two values from `rng`: rotation jitter, then size.
    #[allow(clippy::too_many_arguments)]
    pub fn stamp<R: RandomSource + ?Sized>(
        id:         PrintId,
        walk:       WalkId,
        center:     Point,
        heading:    f64,
        dog_size:   f64,
        slot:       PawSlot,
        created_at: Millis,
        rng:        &mut R,
    ) -> Self {
        let rotation = heading + rng.uniform(-ROTATION_JITTER, ROTATION_JITTER);
        let size = rng.uniform(BASE_SIZE.0, BASE_SIZE.1) * dog_size;
        Self {
            id,
            position: paw_position(center, heading, dog_size, slot),
            rotation,
            size,
            created_at,
            paw: slot,
            walk,
        }
    }

    #[inline]
    pub fn age(&self, now: Millis) -> u64 {
        now.since(self.created_at)
    }

    /// `true` once the print is at least `fade_after_ms` old.
    #[inline]
    pub fn is_fading(&self, now: Millis, fade_after_ms: u64) -> bool {
        self.age(now) >= fade_after_ms
    }

    /// `true` once the print is at least `max_age_ms` old.
    #[inline]
    pub fn is_expired(&self, now: Millis, max_age_ms: u64) -> bool {
        self.age(now) >= max_age_ms
    }
}
