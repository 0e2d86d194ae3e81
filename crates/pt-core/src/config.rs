//! Developer-facing configuration.
//!
//! Every field defaults to the behaviour the animation ships with; an
//! application may load overrides from JSON when the `serde` feature is on.
//! None of it is exposed to the person watching the animation.

use crate::{TrailError, TrailResult};

/// Top-level animation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrailConfig {
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Maximum number of prints kept; older prints are evicted first.
    pub ledger_capacity: usize,

    /// Prints at least this old are removed by the pruning driver.
    pub print_max_age_ms: u64,

    /// Prints at least this old report `fading = true`.
    pub fade_after_ms: u64,

    /// Period of the pruning driver.
    pub prune_interval_ms: u64,

    /// Bounds of the randomized delay between two spawns.
    pub spawn_delay_min_ms: u64,
    pub spawn_delay_max_ms: u64,

    /// Bounds of the per-tick randomized step threshold.
    pub step_interval_min_ms: u64,
    pub step_interval_max_ms: u64,

    /// Frame period of the simulation clock when no display drives it.
    /// 16 ms ≈ 60 Hz.
    pub frame_interval_ms: u64,

    /// Dogs are culled once they are further than this outside the viewport.
    pub offscreen_margin: f64,

    /// Distance outside the entry edge at which new dogs appear.
    pub spawn_offset: f64,

    /// Keep-out band along the far ends of the entry edge.
    pub spawn_inset: f64,

    /// Per-index entrance delay handed to presenters.
    pub stagger_ms: u64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            seed:                 42,
            ledger_capacity:      100,
            print_max_age_ms:     20_000,
            fade_after_ms:        15_000,
            prune_interval_ms:    2_000,
            spawn_delay_min_ms:   3_000,
            spawn_delay_max_ms:   8_000,
            step_interval_min_ms: 400,
            step_interval_max_ms: 600,
            frame_interval_ms:    16,
            offscreen_margin:     100.0,
            spawn_offset:         50.0,
            spawn_inset:          100.0,
            stagger_ms:           20,
        }
    }
}

impl TrailConfig {
    /// Check internal consistency.
    pub fn validate(&self) -> TrailResult<()> {
        if self.ledger_capacity == 0 {
            return Err(TrailError::Config("ledger_capacity must be at least 1".into()));
        }
        if self.print_max_age_ms == 0 {
            return Err(TrailError::Config("print_max_age_ms must be positive".into()));
        }
        if self.fade_after_ms > self.print_max_age_ms {
            return Err(TrailError::Config(format!(
                "fade_after_ms ({}) exceeds print_max_age_ms ({})",
                self.fade_after_ms, self.print_max_age_ms
            )));
        }
        if self.frame_interval_ms == 0 || self.prune_interval_ms == 0 {
            return Err(TrailError::Config("driver intervals must be positive".into()));
        }
        if self.spawn_delay_min_ms > self.spawn_delay_max_ms {
            return Err(TrailError::Config(format!(
                "spawn delay range {}..{} is inverted",
                self.spawn_delay_min_ms, self.spawn_delay_max_ms
            )));
        }
        if self.spawn_delay_max_ms == 0 {
            return Err(TrailError::Config("spawn_delay_max_ms must be positive".into()));
        }
        if self.step_interval_min_ms > self.step_interval_max_ms {
            return Err(TrailError::Config(format!(
                "step interval range {}..{} is inverted",
                self.step_interval_min_ms, self.step_interval_max_ms
            )));
        }
        if !(self.offscreen_margin.is_finite() && self.offscreen_margin >= 0.0) {
            return Err(TrailError::Config("offscreen_margin must be finite and non-negative".into()));
        }
        if !(self.spawn_offset.is_finite() && self.spawn_inset.is_finite()) {
            return Err(TrailError::Config("spawn_offset and spawn_inset must be finite".into()));
        }
        Ok(())
    }

    /// Draw the next spawn delay.
    pub fn sample_spawn_delay<R: crate::RandomSource + ?Sized>(&self, rng: &mut R) -> u64 {
        rng.uniform(self.spawn_delay_min_ms as f64, self.spawn_delay_max_ms as f64) as u64
    }

    /// Draw a step threshold for one agent on one tick.
    pub fn sample_step_interval<R: crate::RandomSource + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.uniform(self.step_interval_min_ms as f64, self.step_interval_max_ms as f64)
    }
}
