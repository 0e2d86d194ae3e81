//! Injectable randomness.
//!
//! Every random choice in the animation (spawn edge, heading, speed, size,
//! step threshold, print jitter) is drawn through [`RandomSource`], so the
//! whole run is reproducible from one seed and tests can script the exact
//! sequence of draws.
//!
//! All ranged draws are computed as `lo + u * (hi - lo)` with `u ∈ [0, 1)`.
//! That form never panics on an empty or inverted range (a viewport shorter
//! than the spawn inset simply yields a value below `lo`), which matters
//! because the viewport is resized by the host at will.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A stream of uniform `f64` values in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform value in `[lo, hi)`.
    #[inline]
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.unit() * (hi - lo)
    }

    /// Fair coin.
    #[inline]
    fn coin(&mut self) -> bool {
        self.unit() < 0.5
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn unit(&mut self) -> f64 {
        (**self).unit()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Seeded simulation RNG.  The same seed always replays the same animation.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

// ── SequenceRng ───────────────────────────────────────────────────────────────

/// Replays a fixed list of unit values, wrapping around at the end.
///
/// Values are clamped into `[0, 1)` on construction and NaN becomes `0.0`.
/// An empty list behaves like `[0.0]`.
#[derive(Clone, Debug)]
pub struct SequenceRng {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let mut values: Vec<f64> = values
            .into_iter()
            .map(|v| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0 - f64::EPSILON) })
            .collect();
        if values.is_empty() {
            values.push(0.0);
        }
        Self { values, cursor: 0 }
    }

    /// Always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new([value])
    }

    /// How many values have been drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRng {
    fn unit(&mut self) -> f64 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}
