//! Randomized dog creation.
//!
//! Dogs enter from the left or the top edge with a heading biased toward the
//! interior, so each one crosses most of the viewport before it is culled.
//!
//! Draw order is fixed (edge, size, position, heading, speed) so a scripted
//! [`RandomSource`] produces a predictable dog.

use pt_core::{Millis, Point, RandomSource, TrailConfig, ViewportSize, WalkId};

use crate::Dog;

/// Headings for dogs entering from the left edge: rightward ± 30°.
pub const LEFT_HEADING: (f64, f64) = (-30.0, 30.0);

/// Headings for dogs entering from the top edge: downward ± 30°.
pub const TOP_HEADING: (f64, f64) = (60.0, 120.0);

pub const SPEED_RANGE: (f64, f64) = (1.0, 3.0);

pub const SIZE_RANGE: (f64, f64) = (0.8, 1.4);

/// Which viewport edge a dog enters from.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpawnEdge {
    Left,
    Top,
}

impl SpawnEdge {
    pub fn sample<R: RandomSource + ?Sized>(rng: &mut R) -> SpawnEdge {
        if rng.coin() { SpawnEdge::Left } else { SpawnEdge::Top }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SpawnEdge::Left => "left",
            SpawnEdge::Top  => "top",
        }
    }
}

impl std::fmt::Display for SpawnEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sample a new dog entering the viewport.
///
/// The entry coordinate along the edge is drawn from
/// `[spawn_inset, extent - spawn_inset)`; the dog itself starts
/// `spawn_offset` units outside the edge.
pub fn sample_dog<R: RandomSource + ?Sized>(
    id:       WalkId,
    rng:      &mut R,
    viewport: ViewportSize,
    config:   &TrailConfig,
    now:      Millis,
) -> (SpawnEdge, Dog) {
    let edge = SpawnEdge::sample(rng);
    let size = rng.uniform(SIZE_RANGE.0, SIZE_RANGE.1);

    let (position, heading) = match edge {
        SpawnEdge::Left => {
            let y = rng.uniform(config.spawn_inset, viewport.height - config.spawn_inset);
            let heading = rng.uniform(LEFT_HEADING.0, LEFT_HEADING.1);
            (Point::new(-config.spawn_offset, y), heading)
        }
        SpawnEdge::Top => {
            let x = rng.uniform(config.spawn_inset, viewport.width - config.spawn_inset);
            let heading = rng.uniform(TOP_HEADING.0, TOP_HEADING.1);
            (Point::new(x, -config.spawn_offset), heading)
        }
    };

    let speed = rng.uniform(SPEED_RANGE.0, SPEED_RANGE.1);
    (edge, Dog::new(id, position, heading, speed, size, now))
}
